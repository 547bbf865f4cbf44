use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.fetch_timeout_secs, 10);
    assert_eq!(cfg.fetch_user_agent, DEFAULT_FETCH_USER_AGENT);
    assert_eq!(cfg.max_upload_bytes, 16 * 1024 * 1024);
    assert!(cfg.upload_dir.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTILENS_BIND_ADDR"),
        "expected InvalidEnvVar(SENTILENS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn fetch_timeout_override() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_FETCH_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_timeout_secs, 5);
}

#[test]
fn fetch_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_FETCH_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTILENS_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SENTILENS_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn fetch_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_FETCH_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTILENS_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SENTILENS_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn fetch_timeout_above_maximum_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_FETCH_TIMEOUT_SECS", "61");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, ref reason }) if var == "SENTILENS_FETCH_TIMEOUT_SECS" && reason.contains("at most 60")),
        "expected InvalidEnvVar(SENTILENS_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn fetch_timeout_at_maximum_is_accepted() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_FETCH_TIMEOUT_SECS", "60");
    let config = build_app_config(lookup_from_map(&map)).expect("should succeed");
    assert_eq!(config.fetch_timeout_secs, MAX_FETCH_TIMEOUT_SECS);
}

#[test]
fn fetch_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_FETCH_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_user_agent, "custom-agent/2.0");
}

#[test]
fn max_upload_bytes_override() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_MAX_UPLOAD_BYTES", "1048576");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_upload_bytes, 1_048_576);
}

#[test]
fn max_upload_bytes_invalid() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_MAX_UPLOAD_BYTES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTILENS_MAX_UPLOAD_BYTES"),
        "expected InvalidEnvVar(SENTILENS_MAX_UPLOAD_BYTES), got: {result:?}"
    );
}

#[test]
fn upload_dir_override() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_UPLOAD_DIR", "/var/tmp/sentilens");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.upload_dir, Some(PathBuf::from("/var/tmp/sentilens")));
}

#[test]
fn blank_upload_dir_falls_back_to_system_temp() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_UPLOAD_DIR", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.upload_dir.is_none());
}

#[test]
fn production_env_is_parsed() {
    let mut map = HashMap::new();
    map.insert("SENTILENS_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
}
