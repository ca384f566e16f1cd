//! Input/output collaborators the conversation talks through

use parley_plugins::{Listener, Speaker, SpeechToText, TextToSpeech};
use std::io::{BufRead, Write};
use std::time::Duration;

/// Text mode: utterances are lines read from `reader`, responses are written to `writer`
pub struct LocalMic<R, W> {
    persona: String,
    reader: R,
    writer: W,
    closed: bool,
}

impl<R: BufRead, W: Write> LocalMic<R, W> {
    pub fn new(persona: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            persona: persona.into(),
            reader,
            writer,
            closed: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Listener for LocalMic<R, W> {
    fn listen(&mut self) -> String {
        if let Err(e) = write!(self.writer, "YOU: ").and_then(|()| self.writer.flush()) {
            tracing::warn!(error = %e, "failed to write prompt");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                if !self.closed {
                    tracing::debug!("input closed");
                }
                self.closed = true;
                String::new()
            }
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read input");
                String::new()
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<R: BufRead, W: Write> Speaker for LocalMic<R, W> {
    fn say(&mut self, phrase: &str) {
        if let Err(e) = writeln!(self.writer, "{}: {}", self.persona, phrase) {
            tracing::warn!(error = %e, "failed to write response");
        }
    }
}

/// Voice mode: waits for the persona keyword on the passive engine, then
/// captures one command with the active engine.
pub struct VoiceMic {
    keyword: String,
    passive: Box<dyn SpeechToText>,
    active: Box<dyn SpeechToText>,
    tts: Box<dyn TextToSpeech>,
    retry_delay: Duration,
}

impl VoiceMic {
    pub fn new(
        persona: &str,
        passive: Box<dyn SpeechToText>,
        active: Box<dyn SpeechToText>,
        tts: Box<dyn TextToSpeech>,
    ) -> Self {
        Self {
            keyword: persona.to_lowercase(),
            passive,
            active,
            tts,
            retry_delay: Duration::from_secs(1),
        }
    }

    /// Pause between failed passive transcriptions
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn wait_for_keyword(&mut self) {
        loop {
            match self.passive.transcribe() {
                Ok(transcript) if transcript.to_lowercase().contains(&self.keyword) => {
                    tracing::debug!(transcript = %transcript, "keyword detected");
                    return;
                }
                Ok(transcript) => {
                    tracing::trace!(transcript = %transcript, "no keyword");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "passive transcription failed");
                    std::thread::sleep(self.retry_delay);
                }
            }
        }
    }
}

impl Listener for VoiceMic {
    fn listen(&mut self) -> String {
        self.wait_for_keyword();
        match self.active.transcribe() {
            Ok(transcript) => transcript,
            Err(e) => {
                tracing::warn!(error = %e, "active transcription failed");
                String::new()
            }
        }
    }
}

impl Speaker for VoiceMic {
    fn say(&mut self, phrase: &str) {
        tracing::debug!(phrase, "speaking");
        if let Err(e) = self.tts.speak(phrase) {
            tracing::warn!(error = %e, "text-to-speech failed");
        }
    }
}
