/// Error types for layer loading and configuration.
use std::path::PathBuf;

/// Failure that aborts loading a single layer.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected visualisation configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("coordinate scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    #[error("invalid gradient: {0}")]
    InvalidGradient(String),

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
