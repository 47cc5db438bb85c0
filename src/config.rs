use crate::error::{BingMapsError, Result};
use std::env;

/// Program used to open URIs when `BINGMAPS_LAUNCHER` is not set
#[cfg(target_os = "macos")]
const DEFAULT_LAUNCHER: &str = "open";
#[cfg(target_os = "windows")]
const DEFAULT_LAUNCHER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_LAUNCHER: &str = "xdg-open";

pub const LAUNCHER_VAR: &str = "BINGMAPS_LAUNCHER";
pub const LAUNCHER_ARGS_VAR: &str = "BINGMAPS_LAUNCHER_ARGS";

/// Serializes tests that touch the launcher variables of the process environment
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// How the map URI is handed over to the OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub program: String,
    /// Arguments placed before the URI
    pub args: Vec<String>,
}

impl LauncherConfig {
    /// Reads the launcher configuration from the environment.
    ///
    /// Call `dotenv::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Returns
    /// * `LauncherConfig` - The platform default launcher with no extra
    ///   arguments for every variable that is unset
    #[must_use]
    pub fn from_env() -> Self {
        let program = get_env_var_or(LAUNCHER_VAR, DEFAULT_LAUNCHER);
        let args = env::var(LAUNCHER_ARGS_VAR)
            .ok()
            .map(|raw| raw.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        LauncherConfig { program, args }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        LauncherConfig {
            program: DEFAULT_LAUNCHER.to_string(),
            args: Vec::new(),
        }
    }
}

/// Gets a required environment variable
///
/// # Arguments
/// * `var_name` - The name of the environment variable to retrieve
///
/// # Errors
/// Returns `BingMapsError::MissingEnvVar` if the environment variable is not set
///
/// # Returns
/// * `Result<String>` - The value of the environment variable
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    env::var(var_name).map_err(|_| BingMapsError::MissingEnvVar(var_name.to_string()))
}

/// Gets an environment variable, falling back to `default` when unset or empty
pub fn get_env_var_or(var_name: &str, default: &str) -> String {
    match get_required_env_var(var_name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
