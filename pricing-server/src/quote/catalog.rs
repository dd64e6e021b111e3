//! Rental Catalog
//!
//! Fleet, add-ons and configurable services offered by the desk.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AddOn, CarModel, ServiceOption, ServiceType};

use crate::pricing::to_decimal;

/// Everything a quote can reference by id
#[derive(Debug, Clone)]
pub struct RentalCatalog {
    pub car_models: Vec<CarModel>,
    pub add_ons: Vec<AddOn>,
    pub services: Vec<ServiceOption>,
}

fn car(id: &str, name: &str, base_price: f64) -> CarModel {
    CarModel {
        id: id.to_string(),
        name: name.to_string(),
        base_price,
    }
}

fn add_on(id: &str, name: &str, price: f64) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    name: &str,
    description: &str,
    service_type: ServiceType,
    default_value: f64,
    min_value: f64,
    max_value: f64,
    value_step: f64,
) -> ServiceOption {
    ServiceOption {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        service_type,
        default_value,
        min_value,
        max_value,
        value_step,
        configurable: true,
    }
}

impl Default for RentalCatalog {
    fn default() -> Self {
        Self {
            car_models: vec![
                car("economy", "Economy", 30.0),
                car("sedan", "Sedan", 50.0),
                car("suv", "SUV", 70.0),
                car("luxury", "Luxury", 100.0),
            ],
            add_ons: vec![
                add_on("gps", "GPS Navigation", 5.0),
                add_on("childSeat", "Child Seat", 3.0),
                add_on("insurance", "Additional Insurance", 15.0),
                add_on("roadside", "Roadside Assistance", 8.0),
                add_on("wifi", "In-car WiFi", 7.0),
            ],
            services: vec![
                service(
                    "customPickup",
                    "Custom Pickup Location",
                    "Get picked up at your preferred location",
                    ServiceType::Fixed,
                    25.0,
                    15.0,
                    50.0,
                    5.0,
                ),
                service(
                    "differentReturn",
                    "Different Return Location",
                    "Return the car to a different location",
                    ServiceType::Fixed,
                    35.0,
                    20.0,
                    70.0,
                    5.0,
                ),
                service(
                    "weddingDecoration",
                    "Wedding Decoration Package",
                    "Special decoration for wedding events",
                    ServiceType::Fixed,
                    120.0,
                    80.0,
                    200.0,
                    10.0,
                ),
                service(
                    "withDriver",
                    "Professional Driver",
                    "Includes a professional driver",
                    ServiceType::Percentage,
                    30.0,
                    20.0,
                    50.0,
                    5.0,
                ),
                service(
                    "phoneAsKey",
                    "Phone-As-Key Service",
                    "Use your smartphone to unlock and start the car",
                    ServiceType::Fixed,
                    15.0,
                    10.0,
                    25.0,
                    5.0,
                ),
            ],
        }
    }
}

impl RentalCatalog {
    /// Car model by id (ids are lower-case)
    pub fn car_model(&self, id: &str) -> AppResult<&CarModel> {
        self.car_models
            .iter()
            .find(|model| model.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| AppError::car_model_not_found(id))
    }

    pub fn add_on(&self, id: &str) -> AppResult<&AddOn> {
        self.add_ons
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::add_on_not_found(id))
    }

    pub fn service(&self, id: &str) -> AppResult<&ServiceOption> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::service_not_found(id))
    }
}

/// Check a chosen service value against the option's range and step
///
/// Non-configurable services only accept their default value.
pub fn validate_service_value(option: &ServiceOption, value: f64) -> AppResult<()> {
    let out_of_range = || {
        AppError::with_message(
            ErrorCode::ServiceValueOutOfRange,
            format!(
                "{} must be between {} and {} in steps of {}",
                option.name, option.min_value, option.max_value, option.value_step
            ),
        )
        .with_detail("service", option.id.clone())
        .with_detail("value", value)
        .with_detail("min", option.min_value)
        .with_detail("max", option.max_value)
        .with_detail("step", option.value_step)
    };

    if !value.is_finite() {
        return Err(out_of_range());
    }
    if !option.configurable {
        return if value == option.default_value {
            Ok(())
        } else {
            Err(out_of_range())
        };
    }
    if value < option.min_value || value > option.max_value {
        return Err(out_of_range());
    }

    let step = to_decimal(option.value_step).unwrap_or_default();
    if step > Decimal::ZERO {
        let on_step = to_decimal(value)
            .zip(to_decimal(option.min_value))
            .and_then(|(value, min)| value.checked_sub(min))
            .and_then(|offset| offset.checked_rem(step))
            .is_some_and(|rem| rem.is_zero());
        if !on_step {
            return Err(out_of_range());
        }
    }
    Ok(())
}
