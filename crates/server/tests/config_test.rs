//! # Configuration Tests
//!
//! These tests modify process environment variables, so they run serially.

use serial_test::serial;
use std::env;
use std::io::Write;
use stockyard_edge::{
    action::ActionNaming,
    config::{get_config, ConfigError, EdgeConfig},
};
use tempfile::NamedTempFile;

/// Clears every environment variable `get_config` reads.
fn clear_env_vars() {
    env::remove_var("PORT");
    env::remove_var("SCRIPT_PATH");
    env::remove_var("ACTION_NAMING");
    env::remove_var("EDGE_SCRIPT_PATH");
    env::remove_var("EDGE_ACTION_NAMING");
    env::remove_var("EDGE_PORT");
    env::remove_var("EDGE_TEST_SCRIPT_DIR");
}

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn test_defaults_without_file_or_env() {
    clear_env_vars();
    let config = get_config(None).expect("defaults should load");
    assert_eq!(config, EdgeConfig::default());
    assert_eq!(config.port, 8000);
    assert_eq!(config.script_path, "./bin/demo/edge-connection.sh");
    assert_eq!(config.action_naming, ActionNaming::Plain);
}

#[test]
#[serial]
fn test_yaml_file_with_substitution() {
    clear_env_vars();
    env::set_var("EDGE_TEST_SCRIPT_DIR", "/opt/edge");
    let file = yaml_file(
        "port: 8100\nscript_path: \"${EDGE_TEST_SCRIPT_DIR}/toggle.sh\"\naction_naming: suffixed\n",
    );

    let config = get_config(file.path().to_str()).expect("file config should load");

    assert_eq!(config.port, 8100);
    assert_eq!(config.script_path, "/opt/edge/toggle.sh");
    assert_eq!(config.action_naming, ActionNaming::Suffixed);
    clear_env_vars();
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env_vars();
    let file = yaml_file("port: 8100\nscript_path: /from/file.sh\n");
    env::set_var("PORT", "9999");
    env::set_var("EDGE_SCRIPT_PATH", "/from/env.sh");
    env::set_var("EDGE_ACTION_NAMING", "suffixed");

    let config = get_config(file.path().to_str()).expect("config should load");

    assert_eq!(config.port, 9999);
    assert_eq!(config.script_path, "/from/env.sh");
    assert_eq!(config.action_naming, ActionNaming::Suffixed);
    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();
    let err = get_config(Some("/definitely/not/here/edge.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
#[serial]
fn test_unknown_action_naming_is_rejected() {
    clear_env_vars();
    env::set_var("EDGE_ACTION_NAMING", "shouty");
    let err = get_config(None).unwrap_err();
    assert!(matches!(err, ConfigError::General(_)));
    clear_env_vars();
}
