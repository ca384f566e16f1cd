use criterion::{criterion_group, criterion_main, Criterion};
use parley_core::Brain;
use parley_plugins::{ReplyPlugin, SpeechHandler};
use std::hint::black_box;

fn brain_with(count: usize) -> Brain {
    Brain::from_plugins((0..count).map(|i| {
        let settings = serde_json::json!({
            "phrases": [format!("[cmd{}]", i)],
            "replies": ["ok"],
        });
        Box::new(ReplyPlugin::from_settings(&format!("plugin{}", i), &settings).unwrap())
            as Box<dyn SpeechHandler>
    }))
    .unwrap()
}

fn bench_query_last_of_50(c: &mut Criterion) {
    let brain = brain_with(50);

    c.bench_function("brain_query_last_of_50", |b| {
        b.iter(|| brain.query(black_box("please run [cmd49] now")));
    });
}

fn bench_query_no_match(c: &mut Criterion) {
    let brain = brain_with(50);

    c.bench_function("brain_query_no_match", |b| {
        b.iter(|| brain.query(black_box("nothing matches this utterance")));
    });
}

fn bench_all_phrases(c: &mut Criterion) {
    let brain = brain_with(50);

    c.bench_function("brain_all_phrases_50", |b| {
        b.iter(|| black_box(brain.all_phrases()));
    });
}

criterion_group!(
    benches,
    bench_query_last_of_50,
    bench_query_no_match,
    bench_all_phrases
);
criterion_main!(benches);
