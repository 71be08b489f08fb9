pub mod defaults;
pub mod env;
pub mod error;
pub mod loader;
pub mod overrides;

/// Default overrides file path - can be replaced via an explicit path
pub const CONFIG_PATH: &str = "config/agents.toml";

pub use error::ConfigError;
pub use overrides::{AgentOverrides, DbOverrides, NotionOverrides};
