//! Tool connector descriptors
//!
//! Each connector describes how the hosting framework reaches one
//! stdio tool server: launch command, arguments, and extra environment.
//! Nothing in this module spawns a process.

mod local;
mod remote;
mod stdio;

pub use local::db_server_params;
pub use remote::{notion_headers, notion_server_params};
pub use stdio::{McpToolset, StdioServerParams};
