use super::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional deployment overrides loaded from config/agents.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentOverrides {
    pub db: DbOverrides,
    pub notion: NotionOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbOverrides {
    pub model: Option<String>,
    pub server_script: Option<PathBuf>,
    pub tool_filter: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotionOverrides {
    pub model: Option<String>,
    pub image: Option<String>,
}

impl AgentOverrides {
    /// Load overrides from a file path (or the default path if None).
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_overrides(path)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct RawDbOverrides {
    pub model: Option<String>,
    pub server_script: Option<String>,
    #[serde(default)]
    pub tool_filter: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct RawNotionOverrides {
    pub model: Option<String>,
    pub image: Option<String>,
}

impl From<RawDbOverrides> for DbOverrides {
    fn from(raw: RawDbOverrides) -> Self {
        let expand = |s: &str| -> String {
            shellexpand::full(s)
                .map(|cow| cow.into_owned())
                .unwrap_or_else(|_| s.to_string())
        };

        let server_script = raw.server_script.map(|s| PathBuf::from(expand(&s)));

        Self {
            model: raw.model,
            server_script,
            tool_filter: raw.tool_filter,
        }
    }
}

impl From<RawNotionOverrides> for NotionOverrides {
    fn from(raw: RawNotionOverrides) -> Self {
        Self {
            model: raw.model,
            image: raw.image,
        }
    }
}
