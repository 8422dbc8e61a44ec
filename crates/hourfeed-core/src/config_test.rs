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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("HOURFEED_APP_DIR", "/srv/hourfeed");
    m
}

#[test]
fn build_app_config_fails_without_app_dir() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "HOURFEED_APP_DIR"),
        "expected MissingEnvVar(HOURFEED_APP_DIR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_app_dir() {
    let mut map = HashMap::new();
    map.insert("HOURFEED_APP_DIR", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOURFEED_APP_DIR"
        ),
        "expected InvalidEnvVar(HOURFEED_APP_DIR), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.app_dir, PathBuf::from("/srv/hourfeed"));
    assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "hourfeed/0.1 (feed-archiver)");
}

#[test]
fn feed_url_override() {
    let mut map = full_env();
    map.insert("HOURFEED_FEED_URL", "https://example.com/atom.xml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_url, "https://example.com/atom.xml");
}

#[test]
fn log_level_override() {
    let mut map = full_env();
    map.insert("HOURFEED_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn request_timeout_secs_override() {
    let mut map = full_env();
    map.insert("HOURFEED_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("HOURFEED_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "HOURFEED_REQUEST_TIMEOUT_SECS"
        ),
        "expected InvalidEnvVar(HOURFEED_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = full_env();
    map.insert("HOURFEED_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn derived_paths_follow_app_dir() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_dir(), PathBuf::from("/srv/hourfeed/feed"));
    assert_eq!(cfg.log_path(), PathBuf::from("/srv/hourfeed/log.txt"));
}
