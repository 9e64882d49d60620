use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Minimum plausible length of a real Sheets API key.
const MIN_API_KEY_LEN: usize = 10;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("OUTLET_ENV", "development"))?;
    let log_level = or_default("OUTLET_LOG_LEVEL", "info");
    let sheet_id = require("OUTLET_SHEET_ID")?;
    let google_api_key = lookup("GOOGLE_API_KEY")
        .ok()
        .filter(|key| api_key_is_usable(key));
    let sources_path = PathBuf::from(or_default("OUTLET_SOURCES_PATH", "./config/outlets.yaml"));
    let sheet_range = or_default("OUTLET_SHEET_RANGE", "A2:M");
    let mapping_location = or_default("OUTLET_MAPPING_LOCATION", "./url-mapping.json");

    let request_timeout_secs = parse_u64("OUTLET_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("OUTLET_USER_AGENT", "outlet-calendar/0.1 (event-sync)");
    let max_retries = parse_u32("OUTLET_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("OUTLET_RETRY_BACKOFF_BASE_SECS", "2")?;

    Ok(AppConfig {
        env,
        log_level,
        sheet_id,
        google_api_key,
        sources_path,
        sheet_range,
        mapping_location,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OUTLET_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// A deployed page may still carry the build-time placeholder (`{{GOOGLE_API_KEY}}`
/// or `$GOOGLE_API_KEY`) when substitution did not run. Those are treated as unset.
fn api_key_is_usable(key: &str) -> bool {
    let key = key.trim();
    key.len() >= MIN_API_KEY_LEN && !key.contains("{{") && !key.starts_with('$')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
