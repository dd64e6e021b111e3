//! Rental Quote Module
//!
//! Builds booking contexts and priced quotes on top of the price engine.

mod catalog;
mod context;
mod service;

pub use catalog::{RentalCatalog, validate_service_value};
pub use context::build_context;
pub use service::{QuoteOptions, SERVICE_RULE_PRIORITY, quote_rental, service_rules};
