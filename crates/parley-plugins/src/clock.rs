//! Clock plugin - tells the current time

use crate::base::{Speaker, SpeechHandler};
use crate::descriptor::PluginDescriptor;
use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike, Utc};
use parley_profile::Profile;
use std::fmt::Write;

const ON_THE_HOUR: &str = "It is %-I %p right now.";
const WITH_MINUTES: &str = "It is %-I:%M %p right now.";

pub struct ClockPlugin {
    name: String,
    offset: Option<FixedOffset>,
}

impl ClockPlugin {
    pub fn new(name: impl Into<String>, utc_offset_minutes: Option<i32>) -> anyhow::Result<Self> {
        let offset = match utc_offset_minutes {
            Some(minutes) => Some(
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| anyhow::anyhow!("utc offset out of range: {minutes} minutes"))?,
            ),
            None => None,
        };

        Ok(Self {
            name: name.into(),
            offset,
        })
    }

    /// Render `time` with a strftime pattern that may come from a message catalog
    fn format_time<Tz: TimeZone>(time: &DateTime<Tz>, speaker: &dyn Speaker) -> anyhow::Result<String>
    where
        Tz::Offset: std::fmt::Display,
    {
        let pattern = if time.minute() == 0 {
            speaker.translate(ON_THE_HOUR)
        } else {
            speaker.translate(WITH_MINUTES)
        };

        let mut out = String::new();
        write!(out, "{}", time.format(&pattern))
            .map_err(|_| anyhow::anyhow!("invalid time format '{pattern}'"))?;
        Ok(out)
    }

    fn now(&self, speaker: &dyn Speaker) -> anyhow::Result<String> {
        match self.offset {
            Some(offset) => Self::format_time(&Utc::now().with_timezone(&offset), speaker),
            None => Self::format_time(&Local::now(), speaker),
        }
    }
}

pub(crate) fn build(
    descriptor: &PluginDescriptor,
    profile: &Profile,
) -> anyhow::Result<Box<dyn SpeechHandler>> {
    Ok(Box::new(ClockPlugin::new(
        descriptor.name.clone(),
        profile.utc_offset_minutes,
    )?))
}

impl SpeechHandler for ClockPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn phrases(&self) -> Vec<String> {
        vec!["TIME".to_string()]
    }

    fn is_valid(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.phrases()
            .iter()
            .any(|phrase| text.contains(&phrase.to_lowercase()))
    }

    fn handle(&self, _text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()> {
        let phrase = self.now(speaker)?;
        speaker.say(&phrase);
        Ok(())
    }
}
