use std::path::PathBuf;

/// Errors raised while reading or writing the profile
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to access profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
