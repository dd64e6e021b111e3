//! Price calculation result - the audit trail handed back to callers

use serde::{Deserialize, Serialize};

use crate::models::PriceRule;

/// One line of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub rule: PriceRule,
    /// Signed amount subtracted from the price (negative = surcharge)
    pub discount: f64,
}

/// Outcome of a single price calculation
///
/// `applied_rules` and `breakdown` are in application order and always have
/// the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCalculationResult {
    pub original_price: f64,
    pub final_price: f64,
    pub applied_rules: Vec<PriceRule>,
    pub breakdown: Vec<PriceBreakdown>,
    pub savings: f64,
    pub savings_percentage: f64,
}
