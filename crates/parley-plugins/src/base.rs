//! Capability traits every plugin and collaborator implements

/// Output collaborator. Fire-and-forget: implementations deal with their own failures.
pub trait Speaker {
    fn say(&mut self, phrase: &str);

    /// Localize an English template into the listener's language
    fn translate(&self, template: &str) -> String {
        template.to_string()
    }
}

/// Input collaborator. Blocks until one utterance is captured; empty means nothing was heard.
pub trait Listener {
    fn listen(&mut self) -> String;

    /// True once the input source is exhausted and no utterance will ever arrive
    fn is_closed(&self) -> bool {
        false
    }
}

/// Base trait for speech handler plugins
pub trait SpeechHandler: Send + Sync {
    /// Plugin name (unique identifier)
    fn name(&self) -> &str;

    /// Words this plugin reacts to, used to bias the active recognizer
    fn phrases(&self) -> Vec<String>;

    /// Wake-style words for the passive recognizer
    fn keyword_phrases(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether this plugin claims `text`. Must be pure: no I/O, same answer for the same input.
    fn is_valid(&self, text: &str) -> bool;

    /// Act on `text`, speaking any response through `speaker`
    fn handle(&self, text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()>;
}

/// Speech-to-text engine. The engine owns its capture device.
pub trait SpeechToText: Send {
    fn transcribe(&mut self) -> anyhow::Result<String>;
}

/// Text-to-speech engine. The engine owns its playback device.
pub trait TextToSpeech: Send {
    fn speak(&mut self, phrase: &str) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockHandler;

    impl SpeechHandler for MockHandler {
        fn name(&self) -> &str {
            "mock"
        }

        fn phrases(&self) -> Vec<String> {
            vec!["MOCK".to_string()]
        }

        fn is_valid(&self, text: &str) -> bool {
            text.contains("mock")
        }

        fn handle(&self, _text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()> {
            speaker.say("mocked");
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Speaker for Recorder {
        fn say(&mut self, phrase: &str) {
            self.0.push(phrase.to_string());
        }
    }

    #[test]
    fn test_speaker_translate_defaults_to_template() {
        let recorder = Recorder::default();
        assert_eq!(recorder.translate("It is 3 PM right now."), "It is 3 PM right now.");
    }

    #[test]
    fn test_handler_defaults() {
        let handler = MockHandler;
        assert_eq!(handler.name(), "mock");
        assert!(handler.keyword_phrases().is_empty());
    }

    #[test]
    fn test_handler_speaks_through_sink() {
        let handler = MockHandler;
        let mut recorder = Recorder::default();

        assert!(handler.is_valid("a mock request"));
        handler.handle("a mock request", &mut recorder).unwrap();
        assert_eq!(recorder.0, vec!["mocked"]);
    }
}
