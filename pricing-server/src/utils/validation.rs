//! Input validation helpers
//!
//! Numeric checks for request bodies that reach the engine directly.

use shared::error::{AppError, ErrorCode};

/// Validate that a number is finite and not negative
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be a finite number"),
        )
        .with_detail("field", field));
    }
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative"),
        )
        .with_detail("field", field)
        .with_detail("value", value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0.0, "basePrice").is_ok());
        assert!(validate_non_negative(49.99, "basePrice").is_ok());

        let err = validate_non_negative(-1.0, "duration").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "duration must not be negative");

        let err = validate_non_negative(f64::INFINITY, "basePrice").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
