//! Price Rule Engine Module
//!
//! - [`condition`]: condition tree evaluation against a booking context
//! - [`matcher`]: applicability, priority ordering, stackable selection
//! - `calculator`: Decimal price composition and breakdown

mod calculator;
pub mod condition;
pub mod matcher;

pub use calculator::{base_amount, calculate_price, rule_discount};
pub use condition::{evaluate_condition, evaluate_condition_group};
pub use matcher::{is_applicable, select_rules};

pub(crate) use calculator::{round_money, savings_percentage, to_decimal, to_f64};
