//! # Script Runner
//!
//! Runs the connection script for an action. Each call spawns its own child
//! process and waits for it; overlapping calls are not serialized.

use async_trait::async_trait;
use std::{
    fmt::Debug,
    path::{Path, PathBuf},
    process::Stdio,
};
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Captured output of a successful script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Could not start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Command '{command}' {status}{}", stderr_note(.stderr))]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

fn stderr_note(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        ".".to_string()
    } else {
        format!(": {stderr}")
    }
}

/// Executes the connection script with a single argument.
#[async_trait]
pub trait ScriptRunner: Send + Sync + Debug {
    async fn run(&self, arg: &str) -> Result<ScriptOutput, RunError>;
}

/// Runs a local executable as a child process.
///
/// The child is killed if the awaiting future is dropped (for example when
/// the client disconnects), so no process outlives its request.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    script_path: PathBuf,
}

impl ProcessRunner {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }
}

#[async_trait]
impl ScriptRunner for ProcessRunner {
    async fn run(&self, arg: &str) -> Result<ScriptOutput, RunError> {
        let command = format!("{} {arg}", self.script_path.display());
        debug!(%command, "Spawning connection script.");

        let output = Command::new(&self.script_path)
            .arg(arg)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| RunError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("returned non-zero exit status {code}"),
                None => "was terminated by a signal".to_string(),
            };
            return Err(RunError::Failed {
                command,
                status,
                stderr,
            });
        }

        Ok(ScriptOutput { stdout, stderr })
    }
}
