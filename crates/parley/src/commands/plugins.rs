use crate::app::App;
use parley_plugins::{Category, PluginDescriptor, PluginRegistry};
use parley_profile::Profile;
use std::path::Path;

fn format_plugin_list(registry: &PluginRegistry, profile: &Profile) -> String {
    let name_width = registry
        .plugins()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Registered Plugins".to_string(), "==================".to_string()];
    for category in Category::ALL {
        let plugins = registry.plugins_by_category(category);
        if plugins.is_empty() {
            continue;
        }
        lines.push(format!("\n{}:", category));
        for plugin in plugins {
            lines.push(format_plugin(plugin, profile, name_width));
        }
    }
    lines.join("\n")
}

fn format_plugin(plugin: &PluginDescriptor, profile: &Profile, name_width: usize) -> String {
    let mut line = format!(
        "  {:<width$}  (v{}) - {}",
        plugin.name,
        plugin.version,
        plugin.description,
        width = name_width
    );
    // Only speech handlers can be switched off
    if plugin.category == Category::SpeechHandler && !profile.is_plugin_enabled(&plugin.name) {
        line.push_str(" [disabled]");
    }
    line
}

fn set_plugin_enabled(
    profile_file: &Path,
    registry: &PluginRegistry,
    name: &str,
    enabled: bool,
) -> anyhow::Result<()> {
    if registry.get_plugin(name, Category::SpeechHandler).is_err() {
        anyhow::bail!("no speech handler named '{}'", name);
    }

    let mut profile = Profile::load(profile_file)?;
    profile.set_plugin_enabled(name, enabled);
    profile.save(profile_file)?;
    tracing::debug!(plugin = %name, enabled, "plugin state saved");
    Ok(())
}

pub fn run_list() -> anyhow::Result<()> {
    let app = App::load()?;
    println!("{}", format_plugin_list(&app.registry, &app.profile));
    Ok(())
}

pub fn run_enable(name: &str) -> anyhow::Result<()> {
    let app = App::load()?;
    set_plugin_enabled(&app.paths.profile_file(), &app.registry, name, true)?;
    println!("Enabled plugin: {}", name);
    Ok(())
}

pub fn run_disable(name: &str) -> anyhow::Result<()> {
    let app = App::load()?;
    set_plugin_enabled(&app.paths.profile_file(), &app.registry, name, false)?;
    println!("Disabled plugin: {}", name);
    Ok(())
}
