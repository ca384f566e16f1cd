mod common;

use common::{calls, FnPlugin, ScriptedMic};
use parley_core::{Brain, Conversation, DispatchOutcome, Identity, APOLOGY, REPROMPT};
use parley_plugins::SpeechHandler;
use parley_profile::Profile;
use regex::Regex;

fn weather_and_attitude() -> (FnPlugin, FnPlugin) {
    let weather = FnPlugin::new("weather", &["weather", "forecast"], |text| {
        text.contains("weather")
    });
    let pattern = Regex::new(r"(?i)bad attitude").unwrap();
    let attitude = FnPlugin::new("attitude", &["attitude"], move |text| pattern.is_match(text));
    (weather, attitude)
}

#[test]
fn test_end_to_end_scenario() {
    let (weather, attitude) = weather_and_attitude();
    let weather_calls = weather.counter();
    let attitude_calls = attitude.counter();
    let brain = Brain::from_plugins([
        Box::new(weather) as Box<dyn SpeechHandler>,
        Box::new(attitude),
    ])
    .unwrap();

    let profile = Profile::default();
    let mic = ScriptedMic::new(&[
        "what's today's weather",
        "You have a bad ATTITUDE",
        "play music",
    ]);
    let mut conversation = Conversation::new(mic, brain, &profile, Box::new(Identity));

    let outcome = conversation.turn();
    assert_eq!(outcome.plugin(), Some("weather"));

    let outcome = conversation.turn();
    assert_eq!(outcome.plugin(), Some("attitude"));

    let outcome = conversation.turn();
    assert!(matches!(outcome, DispatchOutcome::Unmatched { ref text } if text == "play music"));

    assert_eq!(calls(&weather_calls), 1);
    assert_eq!(calls(&attitude_calls), 1);
    assert_eq!(
        conversation.mic().said,
        vec!["weather handled it", "attitude handled it", REPROMPT]
    );
}

#[test]
fn test_no_match_invokes_no_handler() {
    let (weather, attitude) = weather_and_attitude();
    let weather_calls = weather.counter();
    let attitude_calls = attitude.counter();
    let brain = Brain::from_plugins([
        Box::new(weather) as Box<dyn SpeechHandler>,
        Box::new(attitude),
    ])
    .unwrap();

    assert!(brain.query("turn on the lights").is_none());

    let profile = Profile::default();
    let mic = ScriptedMic::new(&["turn on the lights", ""]);
    let mut conversation = Conversation::new(mic, brain, &profile, Box::new(Identity));

    assert!(conversation.turn().is_reprompt());
    assert!(matches!(conversation.turn(), DispatchOutcome::NoInput));

    assert_eq!(calls(&weather_calls), 0);
    assert_eq!(calls(&attitude_calls), 0);
    assert_eq!(conversation.mic().said, vec![REPROMPT, REPROMPT]);
}

#[test]
fn test_fault_containment() {
    const FAILURES: usize = 5;

    let broken = FnPlugin::new("broken", &[], |text| text.contains("break")).failing();
    let broken_calls = broken.counter();
    let echo = FnPlugin::new("echo", &[], |text| text.contains("hello"));
    let brain = Brain::from_plugins([Box::new(broken) as Box<dyn SpeechHandler>, Box::new(echo)])
        .unwrap();

    let mut inputs = vec!["break it"; FAILURES];
    inputs.push("hello again");

    let profile = Profile::default();
    let mut conversation =
        Conversation::new(ScriptedMic::new(&inputs), brain, &profile, Box::new(Identity));

    for _ in 0..FAILURES {
        match conversation.turn() {
            DispatchOutcome::HandlerFailed { plugin, error } => {
                assert_eq!(plugin, "broken");
                assert!(error.to_string().contains("failed on purpose"));
            }
            other => panic!("expected HandlerFailed, got {:?}", other),
        }
    }

    // still accepting input after the failures
    assert_eq!(conversation.turn().plugin(), Some("echo"));
    assert_eq!(conversation.mic().listens, FAILURES + 1);

    let apologies = conversation
        .mic()
        .said
        .iter()
        .filter(|s| s.as_str() == APOLOGY)
        .count();
    assert_eq!(apologies, FAILURES);
    assert_eq!(calls(&broken_calls), FAILURES);
}

#[test]
fn test_one_response_per_turn() {
    let echo = FnPlugin::new("echo", &[], |text| text.contains("hello"));
    let failing = FnPlugin::new("failing", &[], |text| text.contains("fail")).failing();
    let brain = Brain::from_plugins([Box::new(echo) as Box<dyn SpeechHandler>, Box::new(failing)])
        .unwrap();

    let profile = Profile::default();
    let inputs = ["hello", "", "nothing here", "fail"];
    let mut conversation =
        Conversation::new(ScriptedMic::new(&inputs), brain, &profile, Box::new(Identity));

    for expected in 1..=inputs.len() {
        conversation.turn();
        assert_eq!(conversation.mic().said.len(), expected);
    }
}

#[test]
fn test_vocabulary_union() {
    let weather = FnPlugin::new("weather", &["weather", "forecast"], |_| false);
    let attitude = FnPlugin::new("attitude", &["attitude", "weather"], |_| false);
    let brain = Brain::from_plugins([Box::new(weather) as Box<dyn SpeechHandler>, Box::new(attitude)])
        .unwrap();

    let phrases: Vec<_> = brain.all_phrases().into_iter().collect();
    assert_eq!(phrases, vec!["attitude", "forecast", "weather"]);
}
