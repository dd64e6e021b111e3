//! Rental quote pricing
//!
//! Resolves the request against the catalog, turns selected services into
//! surcharge rules, runs the engine for one car and scales to the fleet.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PriceRule, RuleLevel, RuleType, ServiceType};
use shared::pricing::{RentalQuote, RentalQuoteRequest};
use std::collections::HashSet;

use super::catalog::{RentalCatalog, validate_service_value};
use super::context::build_context;
use crate::pricing::{calculate_price, round_money, savings_percentage, to_decimal, to_f64};

/// Priority given to service surcharge rules
pub const SERVICE_RULE_PRIORITY: i32 = 1;

/// Quote behaviour switches (from server config)
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteOptions {
    /// Drop rules whose start/end dates exclude the booking date
    pub enforce_validity_window: bool,
}

/// One stackable surcharge rule per selected service
///
/// The chosen value defaults to the service's default and must respect its
/// range and step. Duplicate selections are charged once.
pub fn service_rules(
    request: &RentalQuoteRequest,
    catalog: &RentalCatalog,
) -> AppResult<Vec<PriceRule>> {
    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for id in &request.selected_services {
        if !seen.insert(id.as_str()) {
            continue;
        }
        let option = catalog.service(id)?;
        let value = request
            .service_values
            .get(id)
            .copied()
            .unwrap_or(option.default_value);
        validate_service_value(option, value)?;

        let rule_type = match option.service_type {
            ServiceType::Fixed => RuleType::Fixed,
            ServiceType::Percentage => RuleType::Percentage,
        };
        rules.push(
            PriceRule::new(format!("service-{}", id), option.name.clone(), rule_type, -value)
                .with_description(option.description.clone())
                .with_priority(SERVICE_RULE_PRIORITY)
                .with_level(RuleLevel::Service)
                .with_stackable(true),
        );
    }
    Ok(rules)
}

/// Catalog price as Decimal; an unrepresentable price is a configuration fault
fn catalog_price(price: f64, id: &str) -> AppResult<Decimal> {
    to_decimal(price)
        .ok_or_else(|| AppError::config(format!("Catalog price of {} is not representable", id)))
}

/// Price a rental booking
///
/// `rules` is the provider snapshot; `today` stands in for a missing
/// booking date.
pub fn quote_rental(
    request: &RentalQuoteRequest,
    rules: &[PriceRule],
    catalog: &RentalCatalog,
    today: NaiveDate,
    options: QuoteOptions,
) -> AppResult<RentalQuote> {
    if request.duration < 1 {
        return Err(AppError::new(ErrorCode::InvalidDuration).with_detail("duration", request.duration));
    }
    if request.car_quantity < 1 {
        return Err(
            AppError::new(ErrorCode::InvalidQuantity).with_detail("carQuantity", request.car_quantity)
        );
    }

    let model = catalog.car_model(&request.car_model)?;
    let mut unit_price = catalog_price(model.base_price, &model.id)?;
    for id in &request.add_ons {
        let add_on = catalog.add_on(id)?;
        unit_price = unit_price
            .checked_add(catalog_price(add_on.price, &add_on.id)?)
            .ok_or_else(|| AppError::config(format!("Unit price overflow at add-on {}", id)))?;
    }

    let context = build_context(request, today);
    let booking_day = request
        .booking_date
        .unwrap_or(today)
        .and_time(NaiveTime::MIN)
        .and_utc();

    let mut selected: Vec<PriceRule> = rules
        .iter()
        .filter(|rule| {
            request
                .selected_rule_ids
                .as_ref()
                .is_none_or(|ids| ids.contains(&rule.id))
        })
        .filter(|rule| !options.enforce_validity_window || rule.is_within_window(booking_day))
        .cloned()
        .collect();
    selected.extend(service_rules(request, catalog)?);

    let per_car = calculate_price(
        &selected,
        &context,
        to_f64(unit_price),
        f64::from(request.duration),
    )?;

    let quantity = Decimal::from(request.car_quantity);
    let scale = |amount: f64| {
        to_decimal(amount)
            .and_then(|amount| amount.checked_mul(quantity))
            .map(round_money)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::ValueOutOfRange, "Fleet total is out of range")
                    .with_detail("carQuantity", request.car_quantity)
            })
    };
    let original = scale(per_car.original_price)?;
    let final_price = scale(per_car.final_price)?;
    let savings = original.saturating_sub(final_price);

    tracing::info!(
        car_model = %model.id,
        duration = request.duration,
        car_quantity = request.car_quantity,
        applied = per_car.applied_rules.len(),
        final_price = %final_price,
        "Rental quote priced"
    );

    Ok(RentalQuote {
        unit_price: to_f64(unit_price),
        duration: request.duration,
        car_quantity: request.car_quantity,
        original_price: to_f64(original),
        final_price: to_f64(final_price),
        savings: to_f64(savings),
        savings_percentage: to_f64(savings_percentage(savings, original)),
        per_car,
        context,
    })
}
