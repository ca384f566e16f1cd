//! Reply plugin - declarative handler configured from manifest settings
//!
//! ```json
//! {
//!   "name": "greeting",
//!   "version": "1.0.0",
//!   "category": "speech-handler",
//!   "factory": "reply",
//!   "settings": {
//!     "phrases": ["HELLO"],
//!     "pattern": "(?i)\\bhello\\b",
//!     "replies": ["Hello there."]
//!   }
//! }
//! ```

use crate::base::{Speaker, SpeechHandler};
use crate::descriptor::PluginDescriptor;
use parley_profile::Profile;
use regex::Regex;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Deserialize)]
struct ReplySettings {
    #[serde(default)]
    phrases: Vec<String>,
    #[serde(default)]
    pattern: Option<String>,
    replies: Vec<String>,
}

pub struct ReplyPlugin {
    name: String,
    phrases: Vec<String>,
    pattern: Option<Regex>,
    replies: Vec<String>,
    next_reply: AtomicUsize,
}

impl ReplyPlugin {
    pub fn from_settings(name: &str, settings: &serde_json::Value) -> anyhow::Result<Self> {
        let settings: ReplySettings = serde_json::from_value(settings.clone())?;

        if settings.replies.is_empty() {
            anyhow::bail!("reply plugin '{name}' has no replies");
        }
        if settings.phrases.is_empty() && settings.pattern.is_none() {
            anyhow::bail!("reply plugin '{name}' needs phrases or a pattern");
        }

        let pattern = settings.pattern.as_deref().map(Regex::new).transpose()?;

        Ok(Self {
            name: name.to_string(),
            phrases: settings.phrases,
            pattern,
            replies: settings.replies,
            next_reply: AtomicUsize::new(0),
        })
    }
}

pub(crate) fn build(
    descriptor: &PluginDescriptor,
    _profile: &Profile,
) -> anyhow::Result<Box<dyn SpeechHandler>> {
    Ok(Box::new(ReplyPlugin::from_settings(
        &descriptor.name,
        &descriptor.settings,
    )?))
}

impl SpeechHandler for ReplyPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn phrases(&self) -> Vec<String> {
        self.phrases.clone()
    }

    fn is_valid(&self, text: &str) -> bool {
        if let Some(pattern) = &self.pattern {
            return pattern.is_match(text);
        }
        let text = text.to_lowercase();
        self.phrases
            .iter()
            .any(|phrase| text.contains(&phrase.to_lowercase()))
    }

    fn handle(&self, _text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()> {
        let idx = self.next_reply.fetch_add(1, Ordering::Relaxed) % self.replies.len();
        let reply = speaker.translate(&self.replies[idx]);
        speaker.say(&reply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phrase_matching() {
        let plugin = ReplyPlugin::from_settings(
            "weather",
            &json!({"phrases": ["weather", "forecast"], "replies": ["Sunny."]}),
        )
        .unwrap();

        assert!(plugin.is_valid("what's today's WEATHER"));
        assert!(plugin.is_valid("give me the forecast"));
        assert!(!plugin.is_valid("play music"));
    }

    #[test]
    fn test_pattern_takes_precedence() {
        let plugin = ReplyPlugin::from_settings(
            "greeting",
            &json!({"phrases": ["HELLO"], "pattern": "^hi$", "replies": ["Hi."]}),
        )
        .unwrap();

        assert!(plugin.is_valid("hi"));
        assert!(!plugin.is_valid("hello"));
        assert_eq!(plugin.phrases(), vec!["HELLO"]);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(ReplyPlugin::from_settings("x", &json!({})).is_err());
        assert!(ReplyPlugin::from_settings("x", &json!({"phrases": ["a"], "replies": []})).is_err());
        assert!(ReplyPlugin::from_settings("x", &json!({"replies": ["a"]})).is_err());
        assert!(
            ReplyPlugin::from_settings("x", &json!({"pattern": "(", "replies": ["a"]})).is_err()
        );
    }
}
