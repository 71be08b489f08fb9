use super::stdio::StdioServerParams;
use crate::config::defaults::{
    NOTION_API_KEY_VAR, NOTION_IMAGE, NOTION_VERSION, OPENAPI_HEADERS_VAR,
};
use crate::config::env::require_env;
use crate::config::error::ConfigError;
use serde_json::json;
use tracing::debug;

/// Serialized header mapping injected into the containerized Notion
/// tool server: a bearer token from `NOTION_API_KEY` plus the fixed
/// API version. A missing credential fails construction outright.
pub fn notion_headers() -> Result<String, ConfigError> {
    let api_key = require_env(NOTION_API_KEY_VAR)?;
    let headers = json!({
        "Authorization": format!("Bearer {api_key}"),
        "Notion-Version": NOTION_VERSION,
    });
    Ok(headers.to_string())
}

/// Launch parameters for the containerized Notion tool server.
///
/// The container reads its HTTP headers from `OPENAPI_MCP_HEADERS`,
/// which is forwarded through `docker run -e`. Container lifecycle is
/// owned by the hosting framework.
pub fn notion_server_params(image: Option<&str>) -> Result<StdioServerParams, ConfigError> {
    let headers = notion_headers()?;
    let image = image.unwrap_or(NOTION_IMAGE);

    debug!(image, "Prepared containerized Notion tool server parameters");

    Ok(StdioServerParams::new("docker")
        .with_args(["run", "--rm", "-i", "-e", OPENAPI_HEADERS_VAR, image])
        .with_env(OPENAPI_HEADERS_VAR, headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn headers_carry_bearer_token_and_api_version() {
        unsafe {
            env::set_var(NOTION_API_KEY_VAR, "secret-token");
        }

        let headers = notion_headers().expect("credential is set");
        let parsed: Value = serde_json::from_str(&headers).expect("headers are valid JSON");
        assert_eq!(
            parsed.get("Authorization").and_then(Value::as_str),
            Some("Bearer secret-token")
        );
        assert_eq!(
            parsed.get("Notion-Version").and_then(Value::as_str),
            Some(NOTION_VERSION)
        );
        assert_eq!(parsed.as_object().map(|map| map.len()), Some(2));

        unsafe {
            env::remove_var(NOTION_API_KEY_VAR);
        }
    }

    #[test]
    #[serial]
    fn missing_credential_fails_before_any_command_is_built() {
        unsafe {
            env::remove_var(NOTION_API_KEY_VAR);
        }

        let result = notion_server_params(None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar { var }) if var == NOTION_API_KEY_VAR
        ));
    }

    #[test]
    #[serial]
    fn docker_invocation_forwards_the_header_variable() {
        unsafe {
            env::set_var(NOTION_API_KEY_VAR, "secret-token");
        }

        let params = notion_server_params(None).expect("credential is set");
        assert_eq!(params.command.to_str(), Some("docker"));
        assert_eq!(
            params.args,
            ["run", "--rm", "-i", "-e", OPENAPI_HEADERS_VAR, NOTION_IMAGE]
        );
        assert!(params.env.contains_key(OPENAPI_HEADERS_VAR));

        unsafe {
            env::remove_var(NOTION_API_KEY_VAR);
        }
    }

    #[test]
    #[serial]
    fn image_override_replaces_the_default() {
        unsafe {
            env::set_var(NOTION_API_KEY_VAR, "secret-token");
        }

        let params = notion_server_params(Some("registry.local/notion:pinned"))
            .expect("credential is set");
        assert_eq!(
            params.args.last().map(String::as_str),
            Some("registry.local/notion:pinned")
        );

        unsafe {
            env::remove_var(NOTION_API_KEY_VAR);
        }
    }
}
