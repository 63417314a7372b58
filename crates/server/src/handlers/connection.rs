//! # Connection Toggle Handler
//!
//! `GET /{action}` checks the action against the allow-list and runs the
//! connection script with it.

use super::{AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionResponse {
    pub message: String,
    /// The script's standard output, verbatim.
    pub output: String,
}

/// Runs the connection script for an allow-listed action.
///
/// Anything not on the allow-list is rejected before a process is spawned.
pub async fn change_connection(
    State(app_state): State<AppState>,
    Path(action): Path<String>,
) -> Result<Json<ConnectionResponse>, AppError> {
    let naming = app_state.config.action_naming;
    let Some(parsed) = naming.parse(&action) else {
        return Err(AppError::InvalidAction(action));
    };

    info!(%action, "Executing connection action.");
    let output = app_state.runner.run(naming.spell(parsed)).await?;
    if !output.stderr.is_empty() {
        debug!(stderr = %output.stderr, "Connection script wrote to stderr.");
    }

    Ok(Json(ConnectionResponse {
        message: format!("Executed action: {action}"),
        output: output.stdout,
    }))
}
