//! Plugin contract, registry and built-in plugins

pub mod attitude;
pub mod base;
pub mod catalog;
pub mod clock;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod reply;
pub mod stt;
pub mod tts;

pub use attitude::AttitudePlugin;
pub use base::{Listener, Speaker, SpeechHandler, SpeechToText, TextToSpeech};
pub use catalog::{Builtin, FactoryCatalog};
pub use clock::ClockPlugin;
pub use descriptor::{Category, Factory, PluginDescriptor, PluginManifest, MANIFEST_FILE};
pub use error::PluginError;
pub use registry::PluginRegistry;
pub use reply::ReplyPlugin;
pub use stt::CommandStt;
pub use tts::{ConsoleTts, EspeakTts};
