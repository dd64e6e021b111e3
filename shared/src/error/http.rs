//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::PriceRuleNotFound
            | Self::CarModelNotFound
            | Self::AddOnNotFound
            | Self::ServiceNotFound => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity (well-formed request, unusable values)
            Self::ServiceValueOutOfRange | Self::InvalidDuration | Self::InvalidQuantity => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 500 Internal Server Error
            Self::InternalError
            | Self::ConfigError
            | Self::StorageError
            | Self::PriceRuleInvalid
            | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
