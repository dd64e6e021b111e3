//! Rental quote DTOs
//!
//! A quote request describes a booking the way the rental desk enters it;
//! the server turns it into a booking context, a base price and a rule set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::result::PriceCalculationResult;
use crate::models::{BookingContext, RentalType};

fn default_route() -> String {
    "local".to_string()
}

fn default_customer_type() -> String {
    "regular".to_string()
}

fn default_location() -> String {
    "office".to_string()
}

fn default_quantity() -> u32 {
    1
}

/// Booking as entered at the rental desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuoteRequest {
    #[serde(default)]
    pub rental_type: RentalType,
    /// Car model id (economy, sedan, suv, luxury)
    pub car_model: String,
    pub car_year: i32,
    #[serde(default)]
    pub mileage: u32,
    /// Days (short-term) or months (long-term)
    pub duration: u32,
    #[serde(default = "default_route")]
    pub route: String,
    #[serde(default = "default_customer_type")]
    pub customer_type: String,
    #[serde(default)]
    pub add_ons: Vec<String>,
    #[serde(default = "default_location")]
    pub pickup_location: String,
    #[serde(default = "default_location")]
    pub return_location: String,
    #[serde(default)]
    pub wedding_decoration: bool,
    #[serde(default)]
    pub with_driver: bool,
    #[serde(default = "default_quantity")]
    pub car_quantity: u32,
    /// Configurable services to charge as surcharges
    #[serde(default)]
    pub selected_services: Vec<String>,
    /// Chosen surcharge per service id; missing entries use the default value
    #[serde(default)]
    pub service_values: HashMap<String, f64>,
    /// Restrict pricing to these rule ids (all applicable rules when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_rule_ids: Option<Vec<String>>,
    /// Day the booking is priced for (today when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<NaiveDate>,
}

impl RentalQuoteRequest {
    /// Minimal request with desk defaults for everything optional
    pub fn new(car_model: impl Into<String>, car_year: i32, duration: u32) -> Self {
        Self {
            rental_type: RentalType::default(),
            car_model: car_model.into(),
            car_year,
            mileage: 0,
            duration,
            route: default_route(),
            customer_type: default_customer_type(),
            add_ons: Vec::new(),
            pickup_location: default_location(),
            return_location: default_location(),
            wedding_decoration: false,
            with_driver: false,
            car_quantity: default_quantity(),
            selected_services: Vec::new(),
            service_values: HashMap::new(),
            selected_rule_ids: None,
            booking_date: None,
        }
    }
}

/// Priced quote for the whole booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuote {
    /// Car base price plus add-ons, per rental unit
    pub unit_price: f64,
    pub duration: u32,
    pub car_quantity: u32,
    /// Totals across all cars
    pub original_price: f64,
    pub final_price: f64,
    pub savings: f64,
    pub savings_percentage: f64,
    /// Engine result for a single car (breakdown lines are per car)
    pub per_car: PriceCalculationResult,
    /// Context the rules were evaluated against
    pub context: BookingContext,
}
