//! Unified error codes for the pricing service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Price rule errors
//! - 2xxx: Rental catalog / quote errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the admin frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Price rules ====================
    /// Price rule not found
    PriceRuleNotFound = 1001,
    /// Price rule source could not be parsed
    PriceRuleInvalid = 1002,
    /// Condition tree could not be parsed
    ConditionInvalid = 1003,

    // ==================== 2xxx: Rental ====================
    /// Car model not found
    CarModelNotFound = 2001,
    /// Add-on not found
    AddOnNotFound = 2002,
    /// Service option not found
    ServiceNotFound = 2003,
    /// Service value outside its configurable range
    ServiceValueOutOfRange = 2004,
    /// Rental duration must be positive
    InvalidDuration = 2005,
    /// Car quantity must be positive
    InvalidQuantity = 2006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// Rule storage could not be read
    StorageError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Price rules
            ErrorCode::PriceRuleNotFound => "Price rule not found",
            ErrorCode::PriceRuleInvalid => "Price rule data is invalid",
            ErrorCode::ConditionInvalid => "Condition logic is invalid",

            // Rental
            ErrorCode::CarModelNotFound => "Car model not found",
            ErrorCode::AddOnNotFound => "Add-on not found",
            ErrorCode::ServiceNotFound => "Service option not found",
            ErrorCode::ServiceValueOutOfRange => "Service value out of range",
            ErrorCode::InvalidDuration => "Rental duration must be at least 1",
            ErrorCode::InvalidQuantity => "Car quantity must be at least 1",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageError => "Rule storage error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Price rules
            1001 => Ok(ErrorCode::PriceRuleNotFound),
            1002 => Ok(ErrorCode::PriceRuleInvalid),
            1003 => Ok(ErrorCode::ConditionInvalid),

            // Rental
            2001 => Ok(ErrorCode::CarModelNotFound),
            2002 => Ok(ErrorCode::AddOnNotFound),
            2003 => Ok(ErrorCode::ServiceNotFound),
            2004 => Ok(ErrorCode::ServiceValueOutOfRange),
            2005 => Ok(ErrorCode::InvalidDuration),
            2006 => Ok(ErrorCode::InvalidQuantity),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::StorageError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::PriceRuleNotFound.code(), 1001);
        assert_eq!(ErrorCode::ServiceValueOutOfRange.code(), 2004);
        assert_eq!(ErrorCode::StorageError.code(), 9003);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1002), Ok(ErrorCode::PriceRuleInvalid));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::CarModelNotFound));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(1999), Err(InvalidErrorCode(1999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::PriceRuleNotFound).unwrap();
        assert_eq!(json, "1001");

        let code: ErrorCode = serde_json::from_str("2005").unwrap();
        assert_eq!(code, ErrorCode::InvalidDuration);

        let result: Result<ErrorCode, _> = serde_json::from_str("4001");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(ErrorCode::PriceRuleNotFound.message(), "Price rule not found");
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }
}
