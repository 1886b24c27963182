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
            | Self::QrCodeNotFound
            | Self::RedirectUnavailable
            | Self::AccountNotFound
            | Self::OrderNotFound => StatusCode::NOT_FOUND,

            // 403 Forbidden (caller redirects to the billing flow)
            Self::PermissionDenied | Self::SubscriptionRequired => StatusCode::FORBIDDEN,

            // 409 Conflict
            Self::AlreadyExists
            | Self::OrderAlreadyDelivered
            | Self::OrderAlreadyCancelled
            | Self::IllegalTransition
            | Self::ConflictError => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
