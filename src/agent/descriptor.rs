use crate::connector::McpToolset;
use serde::{Deserialize, Serialize};

/// A bound (model, prompt, toolset) triple consumed by the hosting
/// framework for the life of the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub model: String,
    pub name: String,
    pub instruction: String,
    pub toolsets: Vec<McpToolset>,
}

impl AgentConfig {
    pub fn new(
        model: impl Into<String>,
        name: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            instruction: instruction.into(),
            toolsets: Vec::new(),
        }
    }

    pub fn with_toolset(mut self, toolset: McpToolset) -> Self {
        self.toolsets.push(toolset);
        self
    }
}
