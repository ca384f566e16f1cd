//! Command STT - delegates recognition to an external program
//!
//! The program receives the vocabulary on stdin, one phrase per line, and
//! prints the transcription on stdout.

use crate::base::SpeechToText;
use crate::descriptor::PluginDescriptor;
use anyhow::Context;
use parley_profile::Profile;
use std::collections::BTreeSet;
use std::io::Write;
use std::process::{Command, Stdio};

pub struct CommandStt {
    argv: Vec<String>,
    vocabulary: Vec<String>,
}

impl CommandStt {
    pub fn new(argv: Vec<String>, vocabulary: &BTreeSet<String>) -> anyhow::Result<Self> {
        if argv.is_empty() {
            anyhow::bail!("stt_command is not configured");
        }
        Ok(Self {
            argv,
            vocabulary: vocabulary.iter().cloned().collect(),
        })
    }
}

pub(crate) fn build_command(
    _descriptor: &PluginDescriptor,
    profile: &Profile,
    vocabulary: &BTreeSet<String>,
) -> anyhow::Result<Box<dyn SpeechToText>> {
    Ok(Box::new(CommandStt::new(
        profile.stt_command.clone(),
        vocabulary,
    )?))
}

impl SpeechToText for CommandStt {
    fn transcribe(&mut self) -> anyhow::Result<String> {
        let mut child = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("failed to start recognizer '{}'", self.argv[0]))?;

        if let Some(mut stdin) = child.stdin.take() {
            for phrase in &self.vocabulary {
                writeln!(stdin, "{}", phrase)?;
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            anyhow::bail!("recognizer '{}' exited with {}", self.argv[0], output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_command() {
        assert!(CommandStt::new(Vec::new(), &BTreeSet::new()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_transcribes_stdout() {
        let vocabulary: BTreeSet<String> = ["TIME".to_string()].into_iter().collect();
        let mut stt = CommandStt::new(
            vec!["sh".into(), "-c".into(), "cat >/dev/null; echo '  what time is it '".into()],
            &vocabulary,
        )
        .unwrap();

        assert_eq!(stt.transcribe().unwrap(), "what time is it");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_error() {
        let mut stt = CommandStt::new(
            vec!["sh".into(), "-c".into(), "exit 3".into()],
            &BTreeSet::new(),
        )
        .unwrap();

        assert!(stt.transcribe().is_err());
    }
}
