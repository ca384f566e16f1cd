use crate::app::{build_registry, plugin_dirs};
use parley_plugins::{Category, PluginRegistry};
use parley_profile::{Paths, Profile};
use std::path::{Path, PathBuf};

/// One line of the report. `status` starts with OK, MISS or ERR.
#[derive(Debug)]
struct Check {
    name: String,
    status: String,
}

impl Check {
    fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    fn is_issue(&self) -> bool {
        self.status.starts_with("ERR")
    }
}

struct Report {
    files: Vec<Check>,
    engines: Vec<Check>,
    commands: Vec<Check>,
    plugin_counts: Vec<(Category, usize)>,
}

impl Report {
    fn issues(&self) -> usize {
        self.files
            .iter()
            .chain(&self.engines)
            .chain(&self.commands)
            .filter(|c| c.is_issue())
            .count()
    }
}

fn build_report(paths: &Paths) -> Report {
    let mut files = Vec::new();

    let profile_file = paths.profile_file();
    let profile = if profile_file.exists() {
        match Profile::load(&profile_file) {
            Ok(profile) => {
                files.push(Check::new("profile.json", "OK "));
                Some(profile)
            }
            Err(e) => {
                files.push(Check::new("profile.json", format!("ERR ({})", e)));
                None
            }
        }
    } else {
        files.push(Check::new("profile.json", "MISS (using defaults)"));
        Some(Profile::default())
    };

    let Some(profile) = profile else {
        return Report {
            files,
            engines: Vec::new(),
            commands: Vec::new(),
            plugin_counts: Vec::new(),
        };
    };

    for dir in plugin_dirs(paths, &profile) {
        let status = if dir.is_dir() { "OK " } else { "MISS" };
        files.push(Check::new(dir.display().to_string(), status));
    }

    let registry = match build_registry(paths, &profile) {
        Ok(registry) => registry,
        Err(e) => {
            files.push(Check::new("plugins", format!("ERR ({:#})", e)));
            return Report {
                files,
                engines: Vec::new(),
                commands: Vec::new(),
                plugin_counts: Vec::new(),
            };
        }
    };

    let plugin_counts = Category::ALL
        .iter()
        .map(|&c| (c, registry.plugins_by_category(c).len()))
        .collect();

    Report {
        files,
        engines: check_engines(&registry, &profile),
        commands: check_commands(&profile),
        plugin_counts,
    }
}

fn check_engines(registry: &PluginRegistry, profile: &Profile) -> Vec<Check> {
    [
        ("stt_engine", profile.stt_engine.as_str(), Category::SpeechToText),
        ("stt_passive_engine", profile.passive_stt_engine(), Category::SpeechToText),
        ("tts_engine", profile.tts_engine.as_str(), Category::TextToSpeech),
    ]
    .into_iter()
    .map(|(field, name, category)| {
        let status = match registry.get_plugin(name, category) {
            Ok(_) => format!("OK  ({})", name),
            Err(e) => format!("ERR ({})", e),
        };
        Check::new(field, status)
    })
    .collect()
}

/// External programs are only checked for the engines that run them
fn check_commands(profile: &Profile) -> Vec<Check> {
    let uses_command_stt =
        profile.stt_engine == "command-stt" || profile.passive_stt_engine() == "command-stt";
    let mut checks = Vec::new();

    if uses_command_stt {
        checks.push(check_argv("stt_command", &profile.stt_command));
    }
    if profile.tts_engine == "espeak-tts" {
        checks.push(check_argv("tts_command", &profile.tts_command));
    }
    checks
}

fn check_argv(field: &str, argv: &[String]) -> Check {
    let status = match argv.first() {
        None => "ERR (not configured)".to_string(),
        Some(program) => match find_on_path(program) {
            Some(found) => format!("OK  ({})", found.display()),
            None => format!("ERR ({} not found)", program),
        },
    };
    Check::new(field, status)
}

fn find_on_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|p| p.is_file())
}

fn render_text(paths: &Paths, report: &Report) -> String {
    let mut sections = Vec::new();

    sections.push("Diagnostic Report\n==================".to_string());

    sections.push(format!(
        "\nSystem\n------\n  OS: {}\n  Arch: {}\n  parley: {}\n  Home: {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_VERSION"),
        paths.home.display(),
    ));

    let groups = [
        ("Files", &report.files),
        ("Engines", &report.engines),
        ("Commands", &report.commands),
    ];
    for (title, checks) in groups {
        if checks.is_empty() {
            continue;
        }
        sections.push(format!("\n{}\n{}", title, "-".repeat(title.len())));
        for check in checks {
            sections.push(format!("  {} {}", check.status, check.name));
        }
    }

    if !report.plugin_counts.is_empty() {
        sections.push("\nPlugins\n-------".to_string());
        for (category, count) in &report.plugin_counts {
            sections.push(format!("  {}: {}", category, count));
        }
    }

    sections.push(format!("\n{} issues found", report.issues()));
    sections.join("\n")
}

fn render_json(paths: &Paths, report: &Report) -> String {
    let checks = |checks: &[Check]| -> serde_json::Value {
        checks
            .iter()
            .map(|c| (c.name.clone(), serde_json::Value::String(c.status.trim().to_string())))
            .collect::<serde_json::Map<_, _>>()
            .into()
    };
    let plugins: serde_json::Map<_, _> = report
        .plugin_counts
        .iter()
        .map(|(category, count)| (category.to_string(), serde_json::json!(count)))
        .collect();

    let value = serde_json::json!({
        "system": {
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
            "version": env!("CARGO_PKG_VERSION"),
            "home": paths.home,
        },
        "files": checks(&report.files),
        "engines": checks(&report.engines),
        "commands": checks(&report.commands),
        "plugins": plugins,
        "issues": report.issues(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let report = build_report(&paths);

    if json {
        println!("{}", render_json(&paths, &report));
    } else {
        println!("{}", render_text(&paths, &report));
    }

    let issues = report.issues();
    if issues > 0 {
        anyhow::bail!("{} diagnostic checks failed", issues);
    }
    Ok(())
}
