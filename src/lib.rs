//! # MCP agent wiring
//!
//! Declarative configuration binding two LLM agents to external MCP tool
//! servers reached over stdio subprocesses. This crate only produces
//! descriptors; the hosting framework owns process lifecycle, tool
//! discovery, and model invocation.
//!
//! ## Key Types
//!
//! - [`AgentConfig`] - A bound (model, instruction, toolset) descriptor
//! - [`StdioServerParams`] - How to launch one stdio tool server
//! - [`McpToolset`] - One tool source entry attached to an agent
//! - [`ConfigError`] - Errors raised while building descriptors
//!
//! ## Agents
//!
//! - [`db_agent`] launches a sandboxed database tool-server module with
//!   the currently running executable.
//! - [`notion_agent`] attaches to the containerized Notion tool server,
//!   authenticated through the `NOTION_API_KEY` environment variable.

pub mod agent;
pub mod config;
pub mod connector;

pub use agent::{
    AgentConfig, db_agent, db_agent_from_default_config, notion_agent,
    notion_agent_from_default_config,
};
pub use config::{AgentOverrides, ConfigError, DbOverrides, NotionOverrides};
pub use connector::{McpToolset, StdioServerParams};
