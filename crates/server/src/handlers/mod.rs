//! # API Route Handlers
//!
//! Axum handlers for the edge connection service.

pub mod connection;

pub use connection::*;

use super::{errors::AppError, state::AppState};
