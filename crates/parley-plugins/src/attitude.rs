//! Attitude plugin - answers remarks about its bad attitude

use crate::base::{Speaker, SpeechHandler};
use crate::descriptor::PluginDescriptor;
use parley_profile::Profile;
use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};

const REPLIES: &[&str] = &[
    "I don't have a problem, punk.",
    "You need to check yourself before you wreck yourself.",
];

pub struct AttitudePlugin {
    name: String,
    pattern: Regex,
    next_reply: AtomicUsize,
}

impl AttitudePlugin {
    pub fn new(name: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(r"(?i)\bbad attitude\b")?,
            next_reply: AtomicUsize::new(0),
        })
    }
}

pub(crate) fn build(
    descriptor: &PluginDescriptor,
    _profile: &Profile,
) -> anyhow::Result<Box<dyn SpeechHandler>> {
    Ok(Box::new(AttitudePlugin::new(descriptor.name.clone())?))
}

impl SpeechHandler for AttitudePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn phrases(&self) -> Vec<String> {
        vec!["ATTITUDE".to_string(), "PROBLEM".to_string()]
    }

    fn is_valid(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn handle(&self, _text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()> {
        let idx = self.next_reply.fetch_add(1, Ordering::Relaxed) % REPLIES.len();
        let reply = speaker.translate(REPLIES[idx]);
        speaker.say(&reply);
        Ok(())
    }
}
