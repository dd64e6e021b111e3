//! Data models
//!
//! Shared between pricing-server and its callers (via API).
//! Field names follow the stored rule format (camelCase).

pub mod condition;
pub mod price_rule;
pub mod rental;

// Re-exports
pub use condition::*;
pub use price_rule::*;
pub use rental::*;
