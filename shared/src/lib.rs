//! Shared types for the rental pricing service
//!
//! Price rule and condition models, pricing result and quote DTOs,
//! and the unified error / response types used by the server.

pub mod error;
pub mod models;
pub mod pricing;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
