use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building agent or connector descriptors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable '{var}' is not set")]
    MissingEnvVar { var: String },

    #[error("overrides file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read overrides from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse overrides from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to resolve the current executable path: {source}")]
    CurrentExe {
        #[source]
        source: io::Error,
    },
}
