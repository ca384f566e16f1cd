//! Plugin error types

use crate::descriptor::Category;
use std::path::PathBuf;

/// Errors produced while loading, registering or looking up plugins
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Manifest is unreadable or violates the manifest rules
    #[error("invalid manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// Manifest points at a factory this build does not have
    #[error("plugin '{plugin}' references unknown factory '{factory}'")]
    UnknownFactory { plugin: String, factory: String },

    /// Factory does not provide the capability set of the declared category
    #[error("plugin '{plugin}' declares {declared} but factory '{factory}' provides {provided}")]
    CategoryMismatch {
        plugin: String,
        factory: String,
        declared: Category,
        provided: Category,
    },

    #[error("unknown plugin category '{0}'")]
    UnknownCategory(String),

    #[error("no {category} plugin named '{name}'")]
    NotFound { name: String, category: Category },

    #[error("duplicate plugin name '{0}'")]
    Duplicate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        let err = PluginError::NotFound {
            name: "nonexistent".into(),
            category: Category::SpeechHandler,
        };
        assert_eq!(
            err.to_string(),
            "no speech-handler plugin named 'nonexistent'"
        );
    }

    #[test]
    fn error_display_category_mismatch() {
        let err = PluginError::CategoryMismatch {
            plugin: "clock2".into(),
            factory: "clock".into(),
            declared: Category::TextToSpeech,
            provided: Category::SpeechHandler,
        };
        assert_eq!(
            err.to_string(),
            "plugin 'clock2' declares text-to-speech but factory 'clock' provides speech-handler"
        );
    }
}
