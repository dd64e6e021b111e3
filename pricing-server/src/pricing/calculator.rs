//! Price Calculator
//!
//! Combines the selected rules into a final price with a line-by-line
//! breakdown. Uses rust_decimal for precise calculations, reports f64.
//!
//! Every rule's amount is computed against the original base price, never
//! the running total, so stacked discounts do not compound. All Decimal
//! arithmetic is checked; a rule whose amount overflows is skipped like any
//! other malformed rule.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingContext, PriceRule, RuleType};
use shared::pricing::{PriceBreakdown, PriceCalculationResult};

use super::matcher::select_rules;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal; `None` for non-finite values or values outside
/// the Decimal range
#[inline]
pub(crate) fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Round to 2 decimal places (half away from zero)
#[inline]
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for reporting, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// `savings / base × 100`, zero when the base is zero, saturating on overflow
pub(crate) fn savings_percentage(savings: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    match savings.checked_div(base) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if savings.is_sign_negative() != base.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Exact `base_price × duration`
///
/// Fails with `ValueOutOfRange` when an input or the product does not fit
/// in a Decimal.
pub fn base_amount(base_price: f64, duration: f64) -> AppResult<Decimal> {
    let out_of_range = || {
        AppError::with_message(ErrorCode::ValueOutOfRange, "basePrice * duration is out of range")
            .with_detail("basePrice", base_price)
            .with_detail("duration", duration)
    };

    let base = to_decimal(base_price).ok_or_else(out_of_range)?;
    let duration = to_decimal(duration).ok_or_else(out_of_range)?;
    base.checked_mul(duration).ok_or_else(out_of_range)
}

/// Signed amount a rule subtracts from `base_price`, rounded to cents
///
/// Returns `None` for rules that cannot produce an amount (unknown type,
/// missing or non-finite value, amount out of range). Negative amounts are
/// surcharges.
pub fn rule_discount(rule: &PriceRule, base_price: Decimal) -> Option<Decimal> {
    let value = to_decimal(rule.value?)?;

    let amount = match rule.rule_type {
        RuleType::Percentage | RuleType::Bulk => base_price
            .checked_mul(value)?
            .checked_div(Decimal::ONE_HUNDRED)?,
        RuleType::Fixed => value,
        RuleType::Unknown => return None,
    };
    Some(round_money(amount))
}

/// Calculate the final price for `base_price × duration` under `rules`
///
/// 1. keep active rules whose condition logic holds for `context`
/// 2. order by priority, lowest number first
/// 3. apply the first non-stackable rule, then every stackable rule
/// 4. clamp the final price at zero
///
/// Rules never make this fail; a rule that cannot produce an amount is
/// skipped and logged. The only error is a base amount that Decimal cannot
/// represent (see [`base_amount`]).
pub fn calculate_price(
    rules: &[PriceRule],
    context: &BookingContext,
    base_price: f64,
    duration: f64,
) -> AppResult<PriceCalculationResult> {
    let original = base_amount(base_price, duration)?;

    let mut running = original;
    let mut applied_rules = Vec::new();
    let mut breakdown = Vec::new();

    for rule in select_rules(rules, context) {
        let applied = rule_discount(rule, original)
            .and_then(|discount| Some((discount, running.checked_sub(discount)?)));
        let Some((discount, next)) = applied else {
            tracing::warn!(rule_id = %rule.id, "Price rule produced no usable amount, skipped");
            continue;
        };

        running = next;
        tracing::debug!(
            rule_id = %rule.id,
            rule_name = %rule.name,
            stackable = rule.stackable,
            discount = %discount,
            "Applied price rule"
        );

        applied_rules.push(rule.clone());
        breakdown.push(PriceBreakdown {
            rule: rule.clone(),
            discount: to_f64(discount),
        });
    }

    let final_price = running.max(Decimal::ZERO);
    let savings = original.saturating_sub(final_price);

    tracing::debug!(
        original_price = %original,
        final_price = %final_price,
        applied = applied_rules.len(),
        "Price calculated"
    );

    Ok(PriceCalculationResult {
        original_price: to_f64(original),
        final_price: to_f64(final_price),
        applied_rules,
        breakdown,
        savings: to_f64(savings),
        savings_percentage: to_f64(savings_percentage(savings, original)),
    })
}
