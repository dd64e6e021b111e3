//! Rental Catalog Models
//!
//! Car models, add-ons and configurable services offered by the rental
//! desk. These feed the quote builder; the price engine never sees them.

use serde::{Deserialize, Serialize};

/// Rental contract type; `duration` is counted in days for short-term and
/// in months for long-term rentals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RentalType {
    #[default]
    ShortTerm,
    LongTerm,
}

impl RentalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTerm => "short-term",
            Self::LongTerm => "long-term",
        }
    }
}

/// Car model with its base price per rental unit (day or month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: String,
    pub name: String,
    pub base_price: f64,
}

/// Optional equipment, charged per rental unit on top of the car price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// How a service surcharge is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Fixed,
    Percentage,
}

/// Service whose surcharge the desk may tune within a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub default_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub value_step: f64,
    pub configurable: bool,
}
