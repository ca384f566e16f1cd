//! User profile: the single immutable configuration value read at startup

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_persona() -> String {
    "PARLEY".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_stt_engine() -> String {
    "command-stt".to_string()
}

fn default_tts_engine() -> String {
    "espeak-tts".to_string()
}

fn default_tts_command() -> Vec<String> {
    vec!["espeak".to_string()]
}

/// Profile loaded from `profile.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Keyword the passive recognizer waits for
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Used in the greeting when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Selects `locale/<language>.json`
    #[serde(default = "default_language")]
    pub language: String,

    /// Active speech-to-text engine slug
    #[serde(default = "default_stt_engine")]
    pub stt_engine: String,

    /// Passive speech-to-text engine slug, falls back to `stt_engine`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stt_passive_engine: Option<String>,

    /// Text-to-speech engine slug
    #[serde(default = "default_tts_engine")]
    pub tts_engine: String,

    /// Argv of the external recognizer used by `command-stt`
    #[serde(default)]
    pub stt_command: Vec<String>,

    /// Argv of the external synthesizer used by `espeak-tts`
    #[serde(default = "default_tts_command")]
    pub tts_command: Vec<String>,

    /// Fixed offset for time reporting; local time when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,

    /// Extra plugin directories scanned after the home plugin directory
    #[serde(default)]
    pub plugin_paths: Vec<PathBuf>,

    /// Handler plugins left out of the session
    #[serde(default)]
    pub disabled_plugins: Vec<String>,
}

impl Profile {
    /// Read the profile, returning defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "profile not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "reading profile");
        let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ProfileError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist the profile atomically
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ProfileError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        crate::atomic_write(path, json.as_bytes()).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn passive_stt_engine(&self) -> &str {
        self.stt_passive_engine.as_deref().unwrap_or(&self.stt_engine)
    }

    /// Check if a plugin is enabled (everything is enabled by default)
    pub fn is_plugin_enabled(&self, name: &str) -> bool {
        !self.disabled_plugins.iter().any(|p| p == name)
    }

    pub fn set_plugin_enabled(&mut self, name: &str, enabled: bool) {
        self.disabled_plugins.retain(|p| p != name);
        if !enabled {
            self.disabled_plugins.push(name.to_string());
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            first_name: None,
            language: default_language(),
            stt_engine: default_stt_engine(),
            stt_passive_engine: None,
            tts_engine: default_tts_engine(),
            stt_command: Vec::new(),
            tts_command: default_tts_command(),
            utc_offset_minutes: None,
            plugin_paths: Vec::new(),
            disabled_plugins: Vec::new(),
        }
    }
}
