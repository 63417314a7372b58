//! # Common Test Utilities
//!
//! Harnesses shared by the `stockyard-edge` integration tests:
//!
//! - `TestApp`: spawns the real router on a random port with a chosen runner.
//! - `RecordingRunner`: a `ScriptRunner` that records its arguments instead of
//!   spawning anything.
//! - `write_script`: writes an executable shell script for process tests.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use stockyard_edge::{
    config::EdgeConfig,
    router::create_router,
    runner::{RunError, ScriptOutput, ScriptRunner},
    state::{build_app_state, AppState},
};
use tokio::{net::TcpListener, task::JoinHandle};

pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

// --- Full Application Test Harness ---

pub struct TestApp {
    pub address: String,
    pub client: Client,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    /// Spawns the router with an explicit runner.
    pub async fn spawn(config: EdgeConfig, runner: Arc<dyn ScriptRunner>) -> Result<Self> {
        Self::spawn_state(AppState::new(config, runner)).await
    }

    /// Spawns the router with the process-backed runner from `config`.
    pub async fn spawn_with_script(config: EdgeConfig) -> Result<Self> {
        Self::spawn_state(build_app_state(config)).await
    }

    async fn spawn_state(state: AppState) -> Result<Self> {
        setup_tracing();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);
        let app = create_router(state);

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            _server_handle: server_handle,
        })
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{path}", self.address))
            .send()
            .await?)
    }
}

// --- Mock Script Runner ---

#[derive(Debug, Clone)]
enum Outcome {
    Succeed(String),
    Fail(String),
}

#[derive(Debug, Clone)]
pub struct RecordingRunner {
    outcome: Outcome,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingRunner {
    /// A runner whose script "prints" `stdout` and exits 0.
    pub fn succeeding(stdout: &str) -> Self {
        Self {
            outcome: Outcome::Succeed(stdout.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A runner whose script writes `stderr` and exits 1.
    pub fn failing(stderr: &str) -> Self {
        Self {
            outcome: Outcome::Fail(stderr.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunner for RecordingRunner {
    async fn run(&self, arg: &str) -> Result<ScriptOutput, RunError> {
        self.calls.lock().unwrap().push(arg.to_string());
        match &self.outcome {
            Outcome::Succeed(stdout) => Ok(ScriptOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Outcome::Fail(stderr) => Err(RunError::Failed {
                command: format!("mock-script {arg}"),
                status: "returned non-zero exit status 1".to_string(),
                stderr: stderr.clone(),
            }),
        }
    }
}

// --- Script Fixtures ---

/// Writes an executable `/bin/sh` script into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(path)
}
