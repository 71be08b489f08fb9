use super::descriptor::AgentConfig;
use crate::config::defaults::{DB_AGENT_MODEL, DB_AGENT_NAME, DB_MCP_PROMPT};
use crate::config::{AgentOverrides, ConfigError, DbOverrides};
use crate::connector::{McpToolset, db_server_params};
use tracing::info;

/// Build the local database agent descriptor.
///
/// The agent talks to a sandboxed database tool server launched by the
/// currently running executable.
pub fn db_agent(overrides: &DbOverrides) -> Result<AgentConfig, ConfigError> {
    let connection = db_server_params(overrides.server_script.as_deref())?;

    let mut toolset = McpToolset::new(connection);
    if let Some(filter) = &overrides.tool_filter {
        toolset = toolset.with_tool_filter(filter.clone());
    }

    let model = overrides
        .model
        .clone()
        .unwrap_or_else(|| DB_AGENT_MODEL.to_string());

    info!(model = %model, name = DB_AGENT_NAME, "Constructed database agent descriptor");

    Ok(AgentConfig::new(model, DB_AGENT_NAME, DB_MCP_PROMPT).with_toolset(toolset))
}

/// Build the database agent, honouring config/agents.toml when present
pub fn db_agent_from_default_config() -> Result<AgentConfig, ConfigError> {
    let overrides = AgentOverrides::load(None)?;
    db_agent(&overrides.db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn default_wiring_matches_the_built_in_values() {
        let agent = db_agent(&DbOverrides::default()).expect("descriptor builds");
        assert_eq!(agent.model, DB_AGENT_MODEL);
        assert_eq!(agent.name, DB_AGENT_NAME);
        assert_eq!(agent.instruction, DB_MCP_PROMPT);
        assert_eq!(agent.toolsets.len(), 1);
        assert!(agent.toolsets[0].tool_filter.is_none());
    }

    #[test]
    fn overrides_replace_model_script_and_filter() {
        let overrides = DbOverrides {
            model: Some("gemini-2.5-pro".to_string()),
            server_script: Some(PathBuf::from("/srv/tools/db_server.wasm")),
            tool_filter: Some(vec!["list_tables".to_string()]),
        };

        let agent = db_agent(&overrides).expect("descriptor builds");
        assert_eq!(agent.model, "gemini-2.5-pro");
        assert_eq!(
            agent.toolsets[0].connection.args,
            ["/srv/tools/db_server.wasm"]
        );
        assert_eq!(
            agent.toolsets[0].tool_filter,
            Some(vec!["list_tables".to_string()])
        );
    }

    #[test]
    fn toolset_argument_is_an_absolute_script_path() {
        let agent = db_agent(&DbOverrides::default()).expect("descriptor builds");
        let script = &agent.toolsets[0].connection.args[0];
        assert!(Path::new(script).is_absolute());
    }
}
