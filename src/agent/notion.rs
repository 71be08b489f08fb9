use super::descriptor::AgentConfig;
use crate::config::defaults::{NOTION_AGENT_MODEL, NOTION_AGENT_NAME, NOTION_PROMPT};
use crate::config::{AgentOverrides, ConfigError, NotionOverrides};
use crate::connector::{McpToolset, notion_server_params};
use tracing::info;

/// Build the Notion agent descriptor.
///
/// Fails with [`ConfigError::MissingEnvVar`] before any launch command
/// is produced when the Notion credential is absent.
pub fn notion_agent(overrides: &NotionOverrides) -> Result<AgentConfig, ConfigError> {
    let connection = notion_server_params(overrides.image.as_deref())?;

    let model = overrides
        .model
        .clone()
        .unwrap_or_else(|| NOTION_AGENT_MODEL.to_string());

    info!(model = %model, name = NOTION_AGENT_NAME, "Constructed Notion agent descriptor");

    Ok(AgentConfig::new(model, NOTION_AGENT_NAME, NOTION_PROMPT)
        .with_toolset(McpToolset::new(connection)))
}

/// Build the Notion agent, honouring config/agents.toml when present
pub fn notion_agent_from_default_config() -> Result<AgentConfig, ConfigError> {
    let overrides = AgentOverrides::load(None)?;
    notion_agent(&overrides.notion)
}
