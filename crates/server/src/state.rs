//! # Application State
//!
//! The shared state handed to every request handler: the loaded
//! configuration and the runner that executes the connection script.

use crate::{
    config::EdgeConfig,
    runner::{ProcessRunner, ScriptRunner},
};
use std::{path::Path, sync::Arc};
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<EdgeConfig>,
    pub runner: Arc<dyn ScriptRunner>,
}

impl AppState {
    pub fn new(config: EdgeConfig, runner: Arc<dyn ScriptRunner>) -> Self {
        Self {
            config: Arc::new(config),
            runner,
        }
    }
}

/// Builds the state with a `ProcessRunner` for the configured script.
///
/// A missing script is only warned about: it may be installed after the
/// service starts, and each request reports its own failure.
pub fn build_app_state(config: EdgeConfig) -> AppState {
    if !Path::new(&config.script_path).exists() {
        warn!(script = %config.script_path, "Connection script not found; requests will fail until it exists.");
    }
    info!(
        script = %config.script_path,
        allowed = ?config.action_naming.allowed(),
        "Configured connection script."
    );
    let runner = Arc::new(ProcessRunner::new(&config.script_path));
    AppState::new(config, runner)
}
