use crate::app_config::{AppConfig, Environment, DEFAULT_FETCH_USER_AGENT};
use crate::ConfigError;

/// Upper bound for `SENTILENS_FETCH_TIMEOUT_SECS`.
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 60;

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
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let value = or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let parse_positive_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let value = or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("SENTILENS_ENV", "development"));
    let bind_addr = parse_addr("SENTILENS_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("SENTILENS_LOG_LEVEL", "info");

    let fetch_timeout_secs = parse_positive_u64("SENTILENS_FETCH_TIMEOUT_SECS", "10")?;
    if fetch_timeout_secs > MAX_FETCH_TIMEOUT_SECS {
        return Err(invalid(
            "SENTILENS_FETCH_TIMEOUT_SECS",
            format!("must be at most {MAX_FETCH_TIMEOUT_SECS}"),
        ));
    }
    let fetch_user_agent = or_default("SENTILENS_FETCH_USER_AGENT", DEFAULT_FETCH_USER_AGENT);
    let max_upload_bytes = parse_positive_usize("SENTILENS_MAX_UPLOAD_BYTES", "16777216")?;
    let upload_dir = lookup("SENTILENS_UPLOAD_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        fetch_timeout_secs,
        fetch_user_agent,
        max_upload_bytes,
        upload_dir,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
