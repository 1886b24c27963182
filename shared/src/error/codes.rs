//! Unified error codes for the QR platform
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission/entitlement errors
//! - 3xxx: QR code errors
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
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
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Account subscription or trial has lapsed
    SubscriptionRequired = 2002,

    // ==================== 3xxx: QR Code ====================
    /// QR code not found
    QrCodeNotFound = 3001,
    /// QR code is not a redirect (direct/url) code
    RedirectUnavailable = 3002,
    /// Account not found
    AccountNotFound = 3101,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been delivered
    OrderAlreadyDelivered = 4002,
    /// Order has already been cancelled
    OrderAlreadyCancelled = 4003,
    /// Requested status transition is not allowed
    IllegalTransition = 4004,
    /// Order has no items
    OrderEmpty = 4005,
    /// Order line references an item absent from the catalog
    OrderItemUnknown = 4006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Concurrent update lost a race; retry
    ConflictError = 9003,
    /// Configuration error
    ConfigError = 9004,
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

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::SubscriptionRequired => "Subscription or trial required",

            // QR Code
            ErrorCode::QrCodeNotFound => "QR code not found",
            ErrorCode::RedirectUnavailable => "QR code has no redirect target",
            ErrorCode::AccountNotFound => "Account not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyDelivered => "Order has already been delivered",
            ErrorCode::OrderAlreadyCancelled => "Order has already been cancelled",
            ErrorCode::IllegalTransition => "Status transition is not allowed",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::OrderItemUnknown => "Order line references an unknown item",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConflictError => "Concurrent update conflict, please retry",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::RequiredField,
            7 => ErrorCode::ValueOutOfRange,
            2001 => ErrorCode::PermissionDenied,
            2002 => ErrorCode::SubscriptionRequired,
            3001 => ErrorCode::QrCodeNotFound,
            3002 => ErrorCode::RedirectUnavailable,
            3101 => ErrorCode::AccountNotFound,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderAlreadyDelivered,
            4003 => ErrorCode::OrderAlreadyCancelled,
            4004 => ErrorCode::IllegalTransition,
            4005 => ErrorCode::OrderEmpty,
            4006 => ErrorCode::OrderItemUnknown,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::ConflictError,
            9004 => ErrorCode::ConfigError,
            other => return Err(format!("unknown error code: {}", other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::SubscriptionRequired.code(), 2002);
        assert_eq!(ErrorCode::QrCodeNotFound.code(), 3001);
        assert_eq!(ErrorCode::IllegalTransition.code(), 4004);
        assert_eq!(ErrorCode::ConflictError.code(), 9003);
    }

    #[test]
    fn test_roundtrip_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::PermissionDenied,
            ErrorCode::QrCodeNotFound,
            ErrorCode::OrderAlreadyCancelled,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
        assert!(ErrorCode::try_from(12345).is_err());
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");
        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn test_messages_non_empty() {
        assert!(!ErrorCode::Unknown.message().is_empty());
        assert_eq!(ErrorCode::QrCodeNotFound.message(), "QR code not found");
    }
}
