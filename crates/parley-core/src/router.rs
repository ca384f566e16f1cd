//! First-match-wins command router

use crate::error::BrainError;
use parley_plugins::{Category, PluginRegistry, SpeechHandler};
use parley_profile::Profile;
use std::collections::BTreeSet;
use std::fmt;

/// Holds the session's handler plugins and resolves utterances to one of them.
///
/// Plugins are asked in the order they were added. That order is fixed for the
/// session and is the tie-break when several predicates accept the same text.
pub struct Brain {
    plugins: Vec<Box<dyn SpeechHandler>>,
}

impl Brain {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn from_plugins<I>(plugins: I) -> Result<Self, BrainError>
    where
        I: IntoIterator<Item = Box<dyn SpeechHandler>>,
    {
        let mut brain = Self::new();
        for plugin in plugins {
            brain.add_plugin(plugin)?;
        }
        Ok(brain)
    }

    /// Instantiate every speech handler of the registry, in registry order.
    ///
    /// Disabled plugins and plugins whose construction fails are skipped.
    pub fn from_registry(registry: &PluginRegistry, profile: &Profile) -> Result<Self, BrainError> {
        let mut brain = Self::new();

        for info in registry.plugins_by_category(Category::SpeechHandler) {
            if !profile.is_plugin_enabled(&info.name) {
                tracing::info!(plugin = %info.name, "plugin disabled in profile");
                continue;
            }

            match info.build_handler(profile) {
                Ok(plugin) => brain.add_plugin(plugin)?,
                Err(e) => {
                    tracing::warn!(plugin = %info.name, reason = %e, "plugin skipped");
                }
            }
        }

        Ok(brain)
    }

    pub fn add_plugin(&mut self, plugin: Box<dyn SpeechHandler>) -> Result<(), BrainError> {
        if self.plugins.iter().any(|p| p.name() == plugin.name()) {
            return Err(BrainError::Duplicate(plugin.name().to_string()));
        }
        tracing::debug!(plugin = plugin.name(), "added plugin to brain");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Find the first plugin whose predicate accepts `text`.
    ///
    /// The text is handed back unchanged. No match is a normal outcome.
    pub fn query<'a, 't>(&'a self, text: &'t str) -> Option<(&'a dyn SpeechHandler, &'t str)> {
        let plugin = self.plugins.iter().find(|p| p.is_valid(text))?;
        tracing::debug!(plugin = plugin.name(), text, "query matched");
        Some((plugin.as_ref(), text))
    }

    /// Vocabulary of every plugin, for the active recognizer
    pub fn all_phrases(&self) -> BTreeSet<String> {
        self.plugins.iter().flat_map(|p| p.phrases()).collect()
    }

    /// Wake-style vocabulary, for the passive recognizer
    pub fn keyword_phrases(&self) -> BTreeSet<String> {
        self.plugins.iter().flat_map(|p| p.keyword_phrases()).collect()
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Brain")
            .field("plugins", &self.plugin_names())
            .finish()
    }
}
