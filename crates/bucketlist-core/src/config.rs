use std::path::PathBuf;

use directories::ProjectDirs;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_GEOSEARCH_BASE_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "bucketlist/0.1 (nearby-places)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let data_dir = lookup("BUCKETLIST_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_data_dir());
    let log_level = or_default("BUCKETLIST_LOG_LEVEL", "info");
    let geosearch_base_url =
        or_default("BUCKETLIST_GEOSEARCH_BASE_URL", DEFAULT_GEOSEARCH_BASE_URL);
    let geosearch_timeout_secs = parse_u64("BUCKETLIST_GEOSEARCH_TIMEOUT_SECS", "30")?;
    if geosearch_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BUCKETLIST_GEOSEARCH_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("BUCKETLIST_USER_AGENT", DEFAULT_USER_AGENT);
    let passcode = lookup("BUCKETLIST_PASSCODE")
        .ok()
        .filter(|p| !p.is_empty());

    Ok(AppConfig {
        data_dir,
        log_level,
        geosearch_base_url,
        geosearch_timeout_secs,
        user_agent,
        passcode,
    })
}

/// Application-private data directory for the current platform, falling back
/// to `./data` when no home directory can be resolved.
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "bucketlist", "BucketList")
        .map_or_else(|| PathBuf::from("./data"), |dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
