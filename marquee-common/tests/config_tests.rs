//! Configuration resolution tests
//!
//! Tests that touch MARQUEE_CONFIG are marked #[serial] so they never race on
//! the process environment.

use marquee_common::config::{
    clamp_result_count, config_file_path, default_root_folder, ConfigOverrides, ServiceConfig,
    TomlConfig, CONFIG_ENV_VAR, DEFAULT_OMDB_API_KEY, DEFAULT_OMDB_BASE_URL, DEFAULT_PORT,
    DEFAULT_RESULT_COUNT, MAX_RESULT_COUNT,
};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_compiled_defaults() {
    let config = ServiceConfig::resolve(ConfigOverrides::default(), TomlConfig::default());

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.omdb_api_key, DEFAULT_OMDB_API_KEY);
    assert_eq!(config.omdb_base_url, DEFAULT_OMDB_BASE_URL);
    assert_eq!(config.result_count, DEFAULT_RESULT_COUNT);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.root_folder, default_root_folder());
    assert!(config.database_path().ends_with("marquee.db"));
}

#[test]
fn test_toml_values_beat_defaults() {
    let file = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/marquee-toml")),
        port: Some(6000),
        omdb_api_key: Some("filekey".to_string()),
        omdb_base_url: None,
        result_count: Some(10),
        log_level: Some("debug".to_string()),
    };

    let config = ServiceConfig::resolve(ConfigOverrides::default(), file);
    assert_eq!(config.root_folder, PathBuf::from("/tmp/marquee-toml"));
    assert_eq!(config.port, 6000);
    assert_eq!(config.omdb_api_key, "filekey");
    assert_eq!(config.omdb_base_url, DEFAULT_OMDB_BASE_URL);
    assert_eq!(config.result_count, 10);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_overrides_beat_toml() {
    let file = TomlConfig {
        port: Some(6000),
        omdb_api_key: Some("filekey".to_string()),
        ..Default::default()
    };
    let overrides = ConfigOverrides {
        port: Some(7000),
        omdb_api_key: Some("clikey".to_string()),
        root_folder: Some(PathBuf::from("/tmp/marquee-cli")),
        ..Default::default()
    };

    let config = ServiceConfig::resolve(overrides, file);
    assert_eq!(config.port, 7000);
    assert_eq!(config.omdb_api_key, "clikey");
    assert_eq!(config.database_path(), PathBuf::from("/tmp/marquee-cli/marquee.db"));
}

#[test]
fn test_result_count_is_clamped() {
    assert_eq!(clamp_result_count(0), 1);
    assert_eq!(clamp_result_count(6), 6);
    assert_eq!(clamp_result_count(25), MAX_RESULT_COUNT);

    let overrides = ConfigOverrides {
        result_count: Some(50),
        ..Default::default()
    };
    let config = ServiceConfig::resolve(overrides, TomlConfig::default());
    assert_eq!(config.result_count, MAX_RESULT_COUNT);
}

#[test]
fn test_load_toml_file() {
    let file = write_config(
        r#"
        port = 5999
        omdb_api_key = "abc123"
        result_count = 4
        "#,
    );

    let config = TomlConfig::load(file.path()).unwrap();
    assert_eq!(config.port, Some(5999));
    assert_eq!(config.omdb_api_key.as_deref(), Some("abc123"));
    assert_eq!(config.result_count, Some(4));
    assert!(config.root_folder.is_none());
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let file = write_config("port = \"not a number\"");
    let result = TomlConfig::load(file.path());
    assert!(matches!(result, Err(marquee_common::Error::Config(_))));
}

#[test]
#[serial]
fn test_config_env_var_selects_file() {
    let file = write_config("port = 5888\n");
    env::set_var(CONFIG_ENV_VAR, file.path());

    assert_eq!(config_file_path(), Some(file.path().to_path_buf()));
    let config = TomlConfig::load_or_default();
    assert_eq!(config.port, Some(5888));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_unreadable_config_falls_back_to_defaults() {
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/marquee/config.toml");

    let config = TomlConfig::load_or_default();
    assert!(config.port.is_none());
    assert!(config.omdb_api_key.is_none());

    env::remove_var(CONFIG_ENV_VAR);
}
