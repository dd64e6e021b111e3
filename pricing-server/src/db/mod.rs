//! Rule storage
//!
//! The service only reads rules; editing happens elsewhere.

pub mod provider;

pub use provider::{InMemoryRuleProvider, JsonFileRuleProvider, PriceRuleProvider, RuleSnapshot};
