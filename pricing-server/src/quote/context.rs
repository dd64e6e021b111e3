//! Booking context assembly
//!
//! Turns a quote request into the flat attribute map rules are evaluated
//! against. Calendar-derived keys use the booking date, so a quote is
//! reproducible for a fixed date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::{Value, json};
use shared::models::BookingContext;
use shared::pricing::RentalQuoteRequest;

/// Build the context for `request`, priced on its booking date or `today`
///
/// | Key | Source |
/// |-----|--------|
/// | customerType, route, duration, mileage, addOns, ... | request fields |
/// | rentalType | `short-term` / `long-term` |
/// | carModel | lower-cased model id |
/// | carAge | booking year − car year (saturating) |
/// | isWeekend | Saturday or Sunday |
/// | isSummer | June to August |
/// | differentReturn | pickup and return locations differ |
/// | date | ISO booking date |
pub fn build_context(request: &RentalQuoteRequest, today: NaiveDate) -> BookingContext {
    let date = request.booking_date.unwrap_or(today);

    let mut context = BookingContext::new();
    let mut set = |key: &str, value: Value| {
        context.insert(key.to_string(), value);
    };

    set("customerType", json!(request.customer_type));
    set("rentalType", json!(request.rental_type.as_str()));
    set("carModel", json!(request.car_model.to_lowercase()));
    set("carAge", json!(date.year().saturating_sub(request.car_year)));
    set("mileage", json!(request.mileage));
    set("route", json!(request.route));
    set("duration", json!(request.duration));
    set("pickupLocation", json!(request.pickup_location));
    set("returnLocation", json!(request.return_location));
    set("weddingDecoration", json!(request.wedding_decoration));
    set("withDriver", json!(request.with_driver));
    set("carQuantity", json!(request.car_quantity));
    set("addOns", json!(request.add_ons));
    set("selectedServices", json!(request.selected_services));
    set(
        "isWeekend",
        json!(matches!(date.weekday(), Weekday::Sat | Weekday::Sun)),
    );
    set("isSummer", json!((6..=8).contains(&date.month())));
    set(
        "differentReturn",
        json!(request.pickup_location != request.return_location),
    );
    set("date", json!(date.format("%Y-%m-%d").to_string()));

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RentalType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_request_fields_copied() {
        let mut request = RentalQuoteRequest::new("SUV", 2020, 10);
        request.customer_type = "business".to_string();
        request.add_ons = vec!["gps".to_string(), "wifi".to_string()];
        request.rental_type = RentalType::LongTerm;

        let context = build_context(&request, date(2024, 3, 13));
        assert_eq!(context["customerType"], "business");
        assert_eq!(context["rentalType"], "long-term");
        assert_eq!(context["carModel"], "suv");
        assert_eq!(context["duration"], 10);
        assert_eq!(context["carQuantity"], 1);
        assert_eq!(context["addOns"], json!(["gps", "wifi"]));
        assert_eq!(context["date"], "2024-03-13");
    }

    #[test]
    fn test_derived_keys() {
        let mut request = RentalQuoteRequest::new("luxury", 2023, 3);
        request.return_location = "airport".to_string();

        // 2024-07-06 is a Saturday
        let context = build_context(&request, date(2024, 7, 6));
        assert_eq!(context["carAge"], 1);
        assert_eq!(context["isWeekend"], true);
        assert_eq!(context["isSummer"], true);
        assert_eq!(context["differentReturn"], true);

        // 2024-09-04 is a Wednesday
        let context = build_context(&RentalQuoteRequest::new("luxury", 2023, 3), date(2024, 9, 4));
        assert_eq!(context["isWeekend"], false);
        assert_eq!(context["isSummer"], false);
        assert_eq!(context["differentReturn"], false);
    }

    #[test]
    fn test_booking_date_overrides_today() {
        let mut request = RentalQuoteRequest::new("sedan", 2020, 2);
        request.booking_date = Some(date(2025, 6, 1));

        let context = build_context(&request, date(2024, 1, 1));
        assert_eq!(context["carAge"], 5);
        assert_eq!(context["isSummer"], true);
        assert_eq!(context["date"], "2025-06-01");
    }

    #[test]
    fn test_extreme_car_year_saturates() {
        let request = RentalQuoteRequest::new("sedan", i32::MIN, 1);
        let context = build_context(&request, date(2024, 3, 13));
        assert_eq!(context["carAge"], i32::MAX);

        let request = RentalQuoteRequest::new("sedan", i32::MAX, 1);
        let context = build_context(&request, date(2024, 3, 13));
        assert_eq!(context["carAge"], 2024 - i32::MAX);
    }
}
