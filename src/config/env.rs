use super::error::ConfigError;
use dotenvy::from_filename;
use std::env;
use std::sync::Once;

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

static ENV_LOADER: Once = Once::new();

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Read a required environment variable after loading config/.env.
///
/// Unset and blank values are both treated as missing; there is no
/// default credential.
pub fn require_env(var: &str) -> Result<String, ConfigError> {
    ensure_env_loaded();
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar {
            var: var.to_string(),
        })
}
