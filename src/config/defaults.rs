//! Built-in agent wiring values
//!
//! Single source of truth for model names, server launch constants, and
//! the instruction prompts. Everything here can be overridden through
//! `config/agents.toml` except the credential variable names and the
//! fixed Notion API version.

pub const DB_AGENT_MODEL: &str = "gemini-2.5-flash";
pub const DB_AGENT_NAME: &str = "db_mcp_client_agent";

/// Sandboxed database tool-server module, shipped under `servers/`
pub const DB_SERVER_SCRIPT: &str = "db_server.wasm";

pub const NOTION_AGENT_MODEL: &str = "gemini-2.0-flash";
pub const NOTION_AGENT_NAME: &str = "Notion_MCP_Agent";

/// Environment variable holding the Notion integration token
pub const NOTION_API_KEY_VAR: &str = "NOTION_API_KEY";

/// Fixed Notion API version sent with every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Container image of the Notion tool server
pub const NOTION_IMAGE: &str = "mcp/notion";

/// Environment variable the Notion server reads its headers from
pub const OPENAPI_HEADERS_VAR: &str = "OPENAPI_MCP_HEADERS";

pub const DB_MCP_PROMPT: &str = r#"
You are a database assistant. You answer questions about the contents of
a local SQLite database using only the tools exposed by the attached
database tool server.

Workflow:
1. Call 'list_tables' first when you do not know the schema.
2. Inspect a table with 'describe_table' before querying it.
3. Use 'query' with read-only SELECT statements to fetch rows.

Never invent table names, column names, or row values. When a question
cannot be answered from the database, say so and name the tables you
checked. Summarise result sets as short lists and include row counts.
"#;

pub const NOTION_PROMPT: &str = r#"
You are a Notion workspace assistant. You manage pages, databases, and
comments through the tools exposed by the attached Notion tool server.

Guidelines:
- Search for an existing page or database before creating a new one.
- Confirm the target parent page when the user asks you to create
  content and the destination is ambiguous.
- When updating properties, read the current values first and change
  only what the user asked for.
- Report the title and URL of every page you create or modify.

Do not delete or archive content unless the user explicitly asks.
"#;
