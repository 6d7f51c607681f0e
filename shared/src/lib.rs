//! Shared types for the Warung POS workspace
//!
//! Common types used across crates: the data model (products, promos,
//! sales, staff, settings, session) and the unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
