#![allow(dead_code)]

use parley_plugins::{Listener, Speaker, SpeechHandler};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mic fed from a script; records everything said
#[derive(Default)]
pub struct ScriptedMic {
    pub inputs: VecDeque<String>,
    pub said: Vec<String>,
    pub listens: usize,
}

impl ScriptedMic {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Listener for ScriptedMic {
    fn listen(&mut self) -> String {
        self.listens += 1;
        self.inputs.pop_front().unwrap_or_default()
    }
}

impl Speaker for ScriptedMic {
    fn say(&mut self, phrase: &str) {
        self.said.push(phrase.to_string());
    }
}

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Handler built from a predicate; counts invocations and can be told to fail
pub struct FnPlugin {
    name: String,
    phrases: Vec<String>,
    predicate: Predicate,
    reply: Option<String>,
    pub calls: Arc<AtomicUsize>,
}

impl FnPlugin {
    pub fn new(
        name: &str,
        phrases: &[&str],
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
            predicate: Box::new(predicate),
            reply: Some(format!("{} handled it", name)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make `handle` return an error instead of speaking
    pub fn failing(mut self) -> Self {
        self.reply = None;
        self
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SpeechHandler for FnPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn phrases(&self) -> Vec<String> {
        self.phrases.clone()
    }

    fn is_valid(&self, text: &str) -> bool {
        (self.predicate)(text)
    }

    fn handle(&self, _text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(reply) => {
                speaker.say(reply);
                Ok(())
            }
            None => anyhow::bail!("{} failed on purpose", self.name),
        }
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
