use super::stdio::StdioServerParams;
use crate::config::defaults::DB_SERVER_SCRIPT;
use crate::config::error::ConfigError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Absolute path of the bundled database tool-server module.
///
/// Resolved against this crate's own location at compile time, so the
/// result does not depend on the working directory the host process is
/// started from. Pure path computation, no filesystem access.
fn bundled_server_script() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("servers")
        .join(DB_SERVER_SCRIPT)
}

/// Launch parameters for the local database tool server.
///
/// The server module runs sandboxed inside the currently running
/// executable, so the launch command is `current_exe()` rather than a
/// hard-coded path. An invalid script path is left for the hosting
/// framework to reject at spawn time.
pub fn db_server_params(script: Option<&Path>) -> Result<StdioServerParams, ConfigError> {
    let command = env::current_exe().map_err(|source| ConfigError::CurrentExe { source })?;
    let script = script
        .map(Path::to_path_buf)
        .unwrap_or_else(bundled_server_script);

    debug!(
        command = %command.display(),
        script = %script.display(),
        "Resolved local database tool server launcher"
    );

    Ok(StdioServerParams::new(command).with_args([script.to_string_lossy().into_owned()]))
}
