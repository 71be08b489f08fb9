use super::CONFIG_PATH;
use super::env::ensure_env_loaded;
use super::error::ConfigError;
use super::overrides::{AgentOverrides, RawDbOverrides, RawNotionOverrides};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Raw overrides structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawOverrides {
    #[serde(default)]
    pub db: RawDbOverrides,
    #[serde(default)]
    pub notion: RawNotionOverrides,
}

/// Load overrides from a file path (or the default path if None)
pub fn load_overrides(path: Option<&Path>) -> Result<AgentOverrides, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_overrides(path),
        None => {
            let default = Path::new(CONFIG_PATH);
            if default.exists() {
                read_overrides(default)
            } else {
                debug!(path = %default.display(), "No overrides file, using built-in defaults");
                Ok(AgentOverrides::default())
            }
        }
    }
}

fn read_overrides(path: &Path) -> Result<AgentOverrides, ConfigError> {
    debug!(path = %path.display(), "Reading agent overrides file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawOverrides = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(AgentOverrides {
        db: parsed.db.into(),
        notion: parsed.notion.into(),
    })
}
