//! Pricing DTOs - calculation results and rental quotes

mod quote;
mod result;

pub use quote::{RentalQuote, RentalQuoteRequest};
pub use result::{PriceBreakdown, PriceCalculationResult};
