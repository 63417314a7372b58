//! # Application Configuration
//!
//! This module defines the configuration of the edge connection service and
//! the logic for loading it from an optional `edge.yml` file and environment
//! variables.

use crate::action::ActionNaming;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// The file consulted when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "edge.yml";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `edge.yml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The executable toggling the connection. Loaded from `EDGE_SCRIPT_PATH`.
    #[serde(default = "default_script_path")]
    pub script_path: String,
    /// Which spelling of the actions is accepted. Loaded from `EDGE_ACTION_NAMING`.
    #[serde(default)]
    pub action_naming: ActionNaming,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            script_path: default_script_path(),
            action_naming: ActionNaming::default(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_script_path() -> String {
    "./bin/demo/edge-connection.sh".to_string()
}

// Helper to read a file, substitute `${VAR}` references with environment
// values, and return its content. Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Regex compilation failed: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the service configuration.
///
/// Layers, lowest precedence first:
/// - built-in defaults;
/// - the YAML file at `config_path_override`, or `edge.yml` in the working
///   directory if present. An explicit path that does not exist is an error;
/// - the `PORT` environment variable;
/// - `EDGE_`-prefixed variables (e.g., `EDGE_SCRIPT_PATH`, `EDGE_ACTION_NAMING`).
pub fn get_config(config_path_override: Option<&str>) -> Result<EdgeConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let config_path = config_path_override.unwrap_or(DEFAULT_CONFIG_FILE);
    match read_and_substitute(config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{config_path}'."
            )));
        }
        None => {}
    }

    let settings = builder
        .add_source(Environment::default().try_parsing(true))
        .add_source(
            Environment::with_prefix("EDGE")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
