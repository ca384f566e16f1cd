//! Compiled-in plugin factories

use crate::descriptor::{Factory, PluginDescriptor};
use crate::{attitude, clock, reply, stt, tts};

/// A factory compiled into this build
#[derive(Debug, Clone)]
pub struct Builtin {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub factory: Factory,
    /// Registered on its own at startup. Template factories (like `reply`)
    /// only become plugins through a manifest that supplies their settings.
    pub standalone: bool,
}

impl Builtin {
    pub fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            name: self.name.to_string(),
            version: self.version.to_string(),
            description: self.description.to_string(),
            category: self.factory.category(),
            factory: self.factory,
            settings: serde_json::Value::Object(serde_json::Map::new()),
            source: None,
        }
    }
}

/// Lookup table from factory name to constructor, in registration order
#[derive(Debug, Clone, Default)]
pub struct FactoryCatalog {
    entries: Vec<Builtin>,
}

impl FactoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding every factory shipped with parley
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add(Builtin {
            name: "clock",
            version: "1.0.0",
            description: "Tells the current time",
            factory: Factory::SpeechHandler(clock::build),
            standalone: true,
        });
        catalog.add(Builtin {
            name: "attitude",
            version: "1.0.0",
            description: "Responds to remarks about its bad attitude",
            factory: Factory::SpeechHandler(attitude::build),
            standalone: true,
        });
        catalog.add(Builtin {
            name: "reply",
            version: "1.0.0",
            description: "Answers configured phrases with canned replies",
            factory: Factory::SpeechHandler(reply::build),
            standalone: false,
        });
        catalog.add(Builtin {
            name: "command-stt",
            version: "1.0.0",
            description: "Transcribes speech by running an external recognizer command",
            factory: Factory::SpeechToText(stt::build_command),
            standalone: true,
        });
        catalog.add(Builtin {
            name: "espeak-tts",
            version: "1.0.0",
            description: "Speaks through espeak or a compatible command",
            factory: Factory::TextToSpeech(tts::build_espeak),
            standalone: true,
        });
        catalog.add(Builtin {
            name: "console-tts",
            version: "1.0.0",
            description: "Prints responses to stdout",
            factory: Factory::TextToSpeech(tts::build_console),
            standalone: true,
        });
        catalog
    }

    /// Add a factory. The first entry for a name wins.
    pub fn add(&mut self, builtin: Builtin) {
        if self.get(builtin.name).is_some() {
            tracing::warn!(factory = builtin.name, "factory already in catalog, ignoring");
            return;
        }
        self.entries.push(builtin);
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.entries.iter().find(|b| b.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Builtin> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
