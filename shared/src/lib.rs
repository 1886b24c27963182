//! Shared types for the QR landing and ordering platform
//!
//! Common types used across crates: error codes and responses, domain
//! models (QR codes, catalogs, orders), and small utilities.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::PaginatedResponse;
pub use serde::{Deserialize, Serialize};
