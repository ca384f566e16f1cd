//! Startup composition shared by the subcommands

use anyhow::Context;
use parley_plugins::{FactoryCatalog, PluginRegistry};
use parley_profile::{Paths, Profile};
use std::path::PathBuf;

/// Everything read from disk before a conversation can start
pub struct App {
    pub paths: Paths,
    pub profile: Profile,
    pub registry: PluginRegistry,
}

impl App {
    pub fn load() -> anyhow::Result<Self> {
        let paths = Paths::new().context("failed to resolve the parley home directory")?;
        Self::from_paths(paths)
    }

    pub fn from_paths(paths: Paths) -> anyhow::Result<Self> {
        let profile_file = paths.profile_file();
        let profile = Profile::load(&profile_file)
            .with_context(|| format!("failed to load profile {}", profile_file.display()))?;
        let registry = build_registry(&paths, &profile)?;

        tracing::debug!(
            home = %paths.home.display(),
            plugins = registry.len(),
            "application state loaded"
        );

        Ok(Self {
            paths,
            profile,
            registry,
        })
    }
}

/// Home plugin directory first, then the profile's extra directories
pub fn plugin_dirs(paths: &Paths, profile: &Profile) -> Vec<PathBuf> {
    std::iter::once(paths.plugins_dir())
        .chain(profile.plugin_paths.iter().cloned())
        .collect()
}

pub fn build_registry(paths: &Paths, profile: &Profile) -> anyhow::Result<PluginRegistry> {
    let catalog = FactoryCatalog::builtin();
    let mut registry = PluginRegistry::with_builtins(&catalog)?;
    registry
        .discover(&plugin_dirs(paths, profile), &catalog)
        .context("plugin discovery failed")?;
    Ok(registry)
}
