//! # Agent descriptors
//!
//! Each descriptor binds a model, an instruction prompt, and the tool
//! sources the hosting framework should attach. Descriptors are built
//! once at startup and never mutated afterwards.
//!
//! ## Key Types
//!
//! - [`AgentConfig`] - The bound (model, instruction, toolset) triple
//! - [`db_agent`] - Local database agent over a sandboxed tool server
//! - [`notion_agent`] - Notion agent over the containerized tool server

mod db;
mod descriptor;
mod notion;

pub use db::{db_agent, db_agent_from_default_config};
pub use descriptor::AgentConfig;
pub use notion::{notion_agent, notion_agent_from_default_config};
