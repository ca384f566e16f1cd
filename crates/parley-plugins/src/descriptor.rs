//! Plugin descriptors, categories and on-disk manifests

use crate::base::{SpeechHandler, SpeechToText, TextToSpeech};
use crate::catalog::FactoryCatalog;
use crate::error::PluginError;
use parley_profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Manifest file name looked up inside each plugin directory
pub const MANIFEST_FILE: &str = "plugin.json";

/// Fixed set of plugin categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AudioEngine,
    SpeechToText,
    TextToSpeech,
    SpeechHandler,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::AudioEngine,
        Category::SpeechToText,
        Category::TextToSpeech,
        Category::SpeechHandler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AudioEngine => "audio-engine",
            Category::SpeechToText => "speech-to-text",
            Category::TextToSpeech => "text-to-speech",
            Category::SpeechHandler => "speech-handler",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio-engine" | "audioengine" => Ok(Category::AudioEngine),
            "speech-to-text" | "stt" => Ok(Category::SpeechToText),
            "text-to-speech" | "tts" => Ok(Category::TextToSpeech),
            "speech-handler" | "speechhandler" => Ok(Category::SpeechHandler),
            other => Err(PluginError::UnknownCategory(other.to_string())),
        }
    }
}

pub type HandlerFactory = fn(&PluginDescriptor, &Profile) -> anyhow::Result<Box<dyn SpeechHandler>>;
pub type SttFactory =
    fn(&PluginDescriptor, &Profile, &BTreeSet<String>) -> anyhow::Result<Box<dyn SpeechToText>>;
pub type TtsFactory = fn(&PluginDescriptor, &Profile) -> anyhow::Result<Box<dyn TextToSpeech>>;

/// Typed constructor; the variant fixes which capability set a plugin exposes
#[derive(Clone, Copy)]
pub enum Factory {
    SpeechHandler(HandlerFactory),
    SpeechToText(SttFactory),
    TextToSpeech(TtsFactory),
}

impl Factory {
    /// Category whose contract this factory satisfies
    pub fn category(&self) -> Category {
        match self {
            Factory::SpeechHandler(_) => Category::SpeechHandler,
            Factory::SpeechToText(_) => Category::SpeechToText,
            Factory::TextToSpeech(_) => Category::TextToSpeech,
        }
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory({})", self.category())
    }
}

/// Immutable record describing one registered plugin
#[derive(Debug, Clone)]
pub struct PluginDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub category: Category,
    pub factory: Factory,
    /// Free-form settings from the manifest (empty object for built-ins)
    pub settings: serde_json::Value,
    /// Directory the manifest was found in; `None` for built-ins
    pub source: Option<PathBuf>,
}

impl PluginDescriptor {
    pub fn build_handler(&self, profile: &Profile) -> anyhow::Result<Box<dyn SpeechHandler>> {
        match self.factory {
            Factory::SpeechHandler(build) => build(self, profile),
            _ => anyhow::bail!("plugin '{}' is not a {}", self.name, Category::SpeechHandler),
        }
    }

    pub fn build_stt(
        &self,
        profile: &Profile,
        vocabulary: &BTreeSet<String>,
    ) -> anyhow::Result<Box<dyn SpeechToText>> {
        match self.factory {
            Factory::SpeechToText(build) => build(self, profile, vocabulary),
            _ => anyhow::bail!("plugin '{}' is not a {}", self.name, Category::SpeechToText),
        }
    }

    pub fn build_tts(&self, profile: &Profile) -> anyhow::Result<Box<dyn TextToSpeech>> {
        match self.factory {
            Factory::TextToSpeech(build) => build(self, profile),
            _ => anyhow::bail!("plugin '{}' is not a {}", self.name, Category::TextToSpeech),
        }
    }
}

/// Contents of a `plugin.json` manifest
#[derive(Debug, Clone, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Catalog entry to construct with; defaults to `name`
    #[serde(default)]
    pub factory: Option<String>,
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

impl PluginManifest {
    /// Read and parse `<dir>/plugin.json`
    pub fn load(dir: &Path) -> Result<Self, PluginError> {
        let path = dir.join(MANIFEST_FILE);
        let contents = std::fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| PluginError::InvalidManifest {
            path,
            reason: e.to_string(),
        })
    }

    /// Check the manifest against the catalog and turn it into a descriptor
    pub fn into_descriptor(
        self,
        catalog: &FactoryCatalog,
        source: &Path,
    ) -> Result<PluginDescriptor, PluginError> {
        let invalid = |reason: String| PluginError::InvalidManifest {
            path: source.join(MANIFEST_FILE),
            reason,
        };

        if !is_slug(&self.name) {
            return Err(invalid(format!("name '{}' is not a slug", self.name)));
        }
        if self.version.trim().is_empty() {
            return Err(invalid("version is required".to_string()));
        }

        let category: Category = self.category.parse()?;
        let factory_name = self.factory.unwrap_or_else(|| self.name.clone());
        let factory = catalog
            .get(&factory_name)
            .map(|builtin| builtin.factory)
            .ok_or_else(|| PluginError::UnknownFactory {
                plugin: self.name.clone(),
                factory: factory_name.clone(),
            })?;

        if factory.category() != category {
            return Err(PluginError::CategoryMismatch {
                plugin: self.name,
                factory: factory_name,
                declared: category,
                provided: factory.category(),
            });
        }

        Ok(PluginDescriptor {
            name: self.name,
            version: self.version,
            description: self.description,
            category,
            factory,
            settings: serde_json::Value::Object(self.settings),
            source: Some(source.to_path_buf()),
        })
    }
}
