use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// How to reach one stdio tool server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdioServerParams {
    pub command: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl StdioServerParams {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            env: HashMap::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Build the launch command for the hosting framework.
    ///
    /// The server speaks JSON-RPC over its stdin/stdout, so both are
    /// piped; stderr stays inherited for server-side logs. The command
    /// is only constructed here, never spawned.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.command);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        if !self.args.is_empty() {
            command.args(&self.args);
        }
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command
    }
}

/// One tool source entry attached to an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpToolset {
    pub connection: StdioServerParams,
    /// Restrict the toolset to the named tools; None loads everything
    #[serde(default)]
    pub tool_filter: Option<Vec<String>>,
}

impl McpToolset {
    pub fn new(connection: StdioServerParams) -> Self {
        Self {
            connection,
            tool_filter: None,
        }
    }

    pub fn with_tool_filter<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_filter = Some(tools.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn to_command_carries_args_and_env() {
        let params = StdioServerParams::new("docker")
            .with_args(["run", "--rm", "-i"])
            .with_env("OPENAPI_MCP_HEADERS", "{}");

        let command = params.to_command();
        let std_command = command.as_std();
        assert_eq!(std_command.get_program(), "docker");
        let args: Vec<_> = std_command.get_args().collect();
        assert_eq!(args, ["run", "--rm", "-i"]);
        assert!(std_command.get_envs().any(|(key, value)| {
            key == OsStr::new("OPENAPI_MCP_HEADERS") && value == Some(OsStr::new("{}"))
        }));
    }

    #[test]
    fn toolset_filter_is_opt_in() {
        let toolset = McpToolset::new(StdioServerParams::new("server"));
        assert!(toolset.tool_filter.is_none());

        let filtered = toolset.with_tool_filter(["list_tables"]);
        assert_eq!(
            filtered.tool_filter,
            Some(vec!["list_tables".to_string()])
        );
    }
}
