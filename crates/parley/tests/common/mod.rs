#![allow(dead_code)]

use parley_plugins::MANIFEST_FILE;
use parley_profile::{Paths, Profile};
use std::path::Path;
use tempfile::TempDir;

/// Fresh parley home in a temp dir
pub fn sample_home() -> (TempDir, Paths) {
    let temp = TempDir::new().unwrap();
    let paths = Paths::with_root(temp.path());
    std::fs::create_dir_all(paths.plugins_dir()).unwrap();
    (temp, paths)
}

pub fn write_profile(paths: &Paths, profile: &Profile) {
    profile.save(&paths.profile_file()).unwrap();
}

pub fn write_plugin(root: &Path, dir: &str, manifest: serde_json::Value) {
    let plugin_dir = root.join(dir);
    std::fs::create_dir_all(&plugin_dir).unwrap();
    std::fs::write(plugin_dir.join(MANIFEST_FILE), manifest.to_string()).unwrap();
}

pub fn reply_manifest(name: &str, phrases: &[&str], reply: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "version": "1.0.0",
        "description": format!("{} replies", name),
        "category": "speech-handler",
        "factory": "reply",
        "settings": {
            "phrases": phrases,
            "replies": [reply],
        }
    })
}

pub fn write_locale(paths: &Paths, language: &str, entries: serde_json::Value) {
    std::fs::create_dir_all(paths.locale_dir()).unwrap();
    std::fs::write(
        paths.locale_dir().join(format!("{}.json", language)),
        entries.to_string(),
    )
    .unwrap();
}
