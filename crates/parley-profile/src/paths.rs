//! Path resolution for the parley home directory

use std::path::PathBuf;

/// Environment variable overriding the parley home directory
pub const HOME_ENV: &str = "PARLEY_HOME";

/// Resolves standard paths under the parley home directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// Resolve the home directory from `$PARLEY_HOME`, falling back to `~/.parley`
    pub fn new() -> std::io::Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(home)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_root(home.join(".parley")))
    }

    /// Use an explicit home directory
    pub fn with_root(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Get profile.json path
    pub fn profile_file(&self) -> PathBuf {
        self.home.join("profile.json")
    }

    /// Get the user plugin directory
    pub fn plugins_dir(&self) -> PathBuf {
        self.home.join("plugins")
    }

    /// Get the message catalog directory
    pub fn locale_dir(&self) -> PathBuf {
        self.home.join("locale")
    }
}
