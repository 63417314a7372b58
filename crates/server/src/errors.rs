use crate::runner::RunError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Each variant maps to one HTTP status; the body is always
/// `{"detail": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    /// The requested action is not on the allow-list.
    InvalidAction(String),
    /// The connection script could not be run or exited unsuccessfully.
    Script(RunError),
}

impl From<RunError> for AppError {
    fn from(err: RunError) -> Self {
        AppError::Script(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, detail) = match self {
            AppError::InvalidAction(action) => {
                warn!(%action, "Rejected action not on the allow-list.");
                (StatusCode::BAD_REQUEST, "Invalid action".to_string())
            }
            AppError::Script(err) => {
                error!("Connection script failed: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to execute script: {err}"),
                )
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}
