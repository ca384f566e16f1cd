//! Plugin registry for discovering and indexing plugins

use crate::catalog::FactoryCatalog;
use crate::descriptor::{Category, PluginDescriptor, PluginManifest, MANIFEST_FILE};
use crate::error::PluginError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry of plugin descriptors, indexed by name and category.
///
/// Built once at startup and read-only afterwards.
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
    by_name: HashMap<String, usize>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry holding every standalone factory of `catalog`
    pub fn with_builtins(catalog: &FactoryCatalog) -> Result<Self, PluginError> {
        let mut registry = Self::new();
        for builtin in catalog.iter().filter(|b| b.standalone) {
            registry.register(builtin.descriptor())?;
        }
        Ok(registry)
    }

    /// Register a descriptor. Names are unique across all categories.
    pub fn register(&mut self, descriptor: PluginDescriptor) -> Result<(), PluginError> {
        if self.by_name.contains_key(&descriptor.name) {
            return Err(PluginError::Duplicate(descriptor.name));
        }

        tracing::debug!(
            plugin = %descriptor.name,
            version = %descriptor.version,
            category = %descriptor.category,
            "registered plugin"
        );
        self.by_name
            .insert(descriptor.name.clone(), self.plugins.len());
        self.plugins.push(descriptor);
        Ok(())
    }

    /// Scan `paths` for plugin directories and register every valid one.
    ///
    /// Each path is a directory of plugin directories holding a `plugin.json`.
    /// Malformed or contract-violating candidates are skipped with a warning;
    /// a duplicate name aborts discovery. Returns the number of plugins added.
    pub fn discover(
        &mut self,
        paths: &[PathBuf],
        catalog: &FactoryCatalog,
    ) -> Result<usize, PluginError> {
        let mut added = 0;

        for path in paths {
            if !path.is_dir() {
                tracing::debug!(path = %path.display(), "plugin path missing, skipping");
                continue;
            }

            let candidates = match list_candidates(path) {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read plugin path");
                    continue;
                }
            };

            for dir in candidates {
                let descriptor = match PluginManifest::load(&dir)
                    .and_then(|manifest| manifest.into_descriptor(catalog, &dir))
                {
                    Ok(descriptor) => descriptor,
                    Err(e) => {
                        tracing::warn!(path = %dir.display(), error = %e, "plugin skipped");
                        continue;
                    }
                };

                self.register(descriptor)?;
                added += 1;
            }
        }

        tracing::debug!(count = added, "plugin discovery finished");
        Ok(added)
    }

    /// Look up a plugin by name; the category has to match as well
    pub fn get_plugin(
        &self,
        name: &str,
        category: Category,
    ) -> Result<&PluginDescriptor, PluginError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.plugins[idx])
            .filter(|descriptor| descriptor.category == category)
            .ok_or_else(|| PluginError::NotFound {
                name: name.to_string(),
                category,
            })
    }

    /// Plugins of one category, in discovery order
    pub fn plugins_by_category(&self, category: Category) -> Vec<&PluginDescriptor> {
        self.plugins
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// All plugins, in discovery order
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Get number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn list_candidates(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let dir = entry?.path();
        if dir.is_dir() && dir.join(MANIFEST_FILE).is_file() {
            dirs.push(dir);
        }
    }
    dirs.sort();
    Ok(dirs)
}
