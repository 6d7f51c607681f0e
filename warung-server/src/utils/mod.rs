//! Utility module
//!
//! Re-exports the unified error types from `shared` so the rest of the
//! crate has one import path for them, plus logging setup.

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Current epoch time in milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
