//! Shared types for the Happy Society site service
//!
//! Typed entities mirroring the hosted data store tables, plus the
//! unified error system used across the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
