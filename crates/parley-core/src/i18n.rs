//! Message catalogs for user-facing strings
//!
//! `locale/<language>.json` holds a flat object mapping the English template
//! to its translation, e.g. `{"Pardon?": "Wie bitte?"}`.

use parley_profile::Profile;
use std::collections::HashMap;
use std::path::Path;

/// Renders user-facing strings in the profile's language
pub trait Translator {
    fn translate(&self, template: &str, profile: &Profile) -> String;
}

/// Returns every template unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Translator for Identity {
    fn translate(&self, template: &str, _profile: &Profile) -> String {
        template.to_string()
    }
}

/// Translations keyed by language tag
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    languages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` file in `dir`. Unreadable files are skipped.
    pub fn load(dir: &Path) -> Self {
        let mut catalog = Self::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => {
                tracing::debug!(path = %dir.display(), "no locale directory");
                return catalog;
            }
        };

        for path in entries.filter_map(|e| e.ok()).map(|e| e.path()) {
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let parsed = std::fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|c| Ok(serde_json::from_str::<HashMap<String, String>>(&c)?));

            match parsed {
                Ok(messages) => {
                    tracing::debug!(language, count = messages.len(), "loaded message catalog");
                    catalog.languages.insert(language.to_string(), messages);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid message catalog");
                }
            }
        }

        catalog
    }

    pub fn insert(&mut self, language: &str, template: &str, translation: &str) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(template.to_string(), translation.to_string());
    }

    fn lookup(&self, language: &str, template: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|messages| messages.get(template))
            .map(String::as_str)
    }
}

impl Translator for Catalog {
    /// Exact language first, then its primary subtag (`de-AT` -> `de`), then the template
    fn translate(&self, template: &str, profile: &Profile) -> String {
        let language = profile.language.as_str();
        let primary = language.split(['-', '_']).next().unwrap_or(language);

        self.lookup(language, template)
            .or_else(|| self.lookup(primary, template))
            .unwrap_or(template)
            .to_string()
    }
}
