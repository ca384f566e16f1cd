//! Text-to-speech engines

use crate::base::TextToSpeech;
use crate::descriptor::PluginDescriptor;
use anyhow::Context;
use parley_profile::Profile;
use std::process::Command;

/// Speaks by running `tts_command` with the phrase as its last argument
pub struct EspeakTts {
    argv: Vec<String>,
}

impl EspeakTts {
    pub fn new(argv: Vec<String>) -> anyhow::Result<Self> {
        if argv.is_empty() {
            anyhow::bail!("tts_command is not configured");
        }
        Ok(Self { argv })
    }
}

impl TextToSpeech for EspeakTts {
    fn speak(&mut self, phrase: &str) -> anyhow::Result<()> {
        let status = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .arg(phrase)
            .status()
            .with_context(|| format!("failed to start synthesizer '{}'", self.argv[0]))?;

        if !status.success() {
            anyhow::bail!("synthesizer '{}' exited with {}", self.argv[0], status);
        }
        Ok(())
    }
}

/// Prints each phrase on stdout
pub struct ConsoleTts;

impl TextToSpeech for ConsoleTts {
    fn speak(&mut self, phrase: &str) -> anyhow::Result<()> {
        println!("{}", phrase);
        Ok(())
    }
}

pub(crate) fn build_espeak(
    _descriptor: &PluginDescriptor,
    profile: &Profile,
) -> anyhow::Result<Box<dyn TextToSpeech>> {
    Ok(Box::new(EspeakTts::new(profile.tts_command.clone())?))
}

pub(crate) fn build_console(
    _descriptor: &PluginDescriptor,
    _profile: &Profile,
) -> anyhow::Result<Box<dyn TextToSpeech>> {
    Ok(Box::new(ConsoleTts))
}
