//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! from the process environment.

use std::io::Write;
use std::path::PathBuf;

use caltally_domain::{CalTallyError, IgnoreListMode};
use caltally_infra::config;
use chrono::Weekday;
use serial_test::serial;
use tempfile::NamedTempFile;

const ENV_KEYS: [&str; 6] = [
    "CALTALLY_WEEK_START",
    "CALTALLY_REPORTING_THRESHOLD",
    "CALTALLY_IGNORE_MODE",
    "CALTALLY_FIRST_SEGMENT_WIDTH",
    "CALTALLY_LOG_LEVEL",
    "CALTALLY_LOG_JSON",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

/// Write `content` to a temporary file carrying `extension`
fn config_file(content: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = config_file(
        r#"{
            "engine": {
                "week_start": "Mon",
                "reporting_threshold": 3,
                "ignore_mode": "inspect",
                "first_segment_width": 60
            },
            "logging": {
                "level": "caltally_core=debug",
                "json": true
            }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load JSON config");

    assert_eq!(config.engine.week_start, Weekday::Mon);
    assert_eq!(config.engine.reporting_threshold, 3);
    assert_eq!(config.engine.ignore_mode, IgnoreListMode::Inspect);
    assert_eq!(config.engine.first_segment_width, 60);
    assert_eq!(config.logging.level, "caltally_core=debug");
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file_with_defaults() {
    let path = config_file(
        r#"
[engine]
reporting_threshold = 0
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load TOML config");

    assert_eq!(config.engine.reporting_threshold, 0);
    assert_eq!(config.engine.week_start, Weekday::Sun);
    assert_eq!(config.engine.ignore_mode, IgnoreListMode::Skip);
    assert_eq!(config.logging.level, "info");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_file_values_are_validated() {
    let path = config_file(r#"{ "engine": { "first_segment_width": 0 } }"#, "json");

    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(matches!(err, CalTallyError::Config(msg) if msg.contains("width")));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_from_missing_file() {
    let result = config::load_from_file(Some(PathBuf::from("/nonexistent/caltally.toml")));
    assert!(matches!(result, Err(CalTallyError::Config(_))));
}

#[test]
fn test_invalid_json_is_rejected() {
    let path = config_file(r#"{ "engine": "#, "json");
    assert!(config::load_from_file(Some(path.clone())).is_err());
    std::fs::remove_file(path).ok();
}

#[test]
#[serial]
fn test_load_from_env_all_vars_set() {
    clear_env();
    std::env::set_var("CALTALLY_WEEK_START", "monday");
    std::env::set_var("CALTALLY_REPORTING_THRESHOLD", "15");
    std::env::set_var("CALTALLY_IGNORE_MODE", "Inspect");
    std::env::set_var("CALTALLY_FIRST_SEGMENT_WIDTH", "64");
    std::env::set_var("CALTALLY_LOG_LEVEL", "debug");
    std::env::set_var("CALTALLY_LOG_JSON", "yes");

    let result = config::load_from_env();
    clear_env();

    let config = result.expect("Should load config from env vars");
    assert_eq!(config.engine.week_start, Weekday::Mon);
    assert_eq!(config.engine.reporting_threshold, 15);
    assert_eq!(config.engine.ignore_mode, IgnoreListMode::Inspect);
    assert_eq!(config.engine.first_segment_width, 64);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
#[serial]
fn test_load_from_env_optional_vars_default() {
    clear_env();
    std::env::set_var("CALTALLY_WEEK_START", "Sun");
    std::env::set_var("CALTALLY_REPORTING_THRESHOLD", "10");

    let result = config::load_from_env();
    clear_env();

    let config = result.expect("Should load config from required env vars");
    assert_eq!(config.engine.ignore_mode, IgnoreListMode::Skip);
    assert_eq!(config.engine.first_segment_width, 50);
    assert!(!config.logging.json);
}

#[test]
#[serial]
fn test_load_from_env_missing_var() {
    clear_env();
    std::env::set_var("CALTALLY_WEEK_START", "Sun");

    let result = config::load_from_env();
    clear_env();

    match result {
        Err(CalTallyError::Config(msg)) => assert!(msg.contains("CALTALLY_REPORTING_THRESHOLD")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_load_from_env_invalid_values() {
    clear_env();
    std::env::set_var("CALTALLY_WEEK_START", "Someday");
    std::env::set_var("CALTALLY_REPORTING_THRESHOLD", "10");
    let bad_day = config::load_from_env();

    std::env::set_var("CALTALLY_WEEK_START", "Sun");
    std::env::set_var("CALTALLY_REPORTING_THRESHOLD", "-3");
    let negative = config::load_from_env();

    std::env::set_var("CALTALLY_REPORTING_THRESHOLD", "10");
    std::env::set_var("CALTALLY_IGNORE_MODE", "drop");
    let bad_mode = config::load_from_env();
    clear_env();

    assert!(matches!(bad_day, Err(CalTallyError::Config(_))));
    assert!(matches!(negative, Err(CalTallyError::Config(_))));
    assert!(matches!(bad_mode, Err(CalTallyError::Config(_))));
}

#[test]
#[serial]
fn test_load_prefers_environment() {
    clear_env();
    std::env::set_var("CALTALLY_WEEK_START", "Sat");
    std::env::set_var("CALTALLY_REPORTING_THRESHOLD", "1");

    let result = config::load();
    clear_env();

    let config = result.expect("Should load config from env vars");
    assert_eq!(config.engine.week_start, Weekday::Sat);
    assert_eq!(config.engine.reporting_threshold, 1);
}
