//! Error codes for the back-office API
//!
//! Codes are grouped by domain:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu, product and import errors
//! - 7xxx: Table, reservation and shift errors
//! - 8xxx: Staff and customer errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as its `u16` value.
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
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Write rejected by a store constraint (dangling reference, check)
    ConstraintViolation = 9,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Unknown order status value
    OrderStatusInvalid = 4008,
    /// Status change not allowed from the current status
    OrderStatusTransitionDenied = 4009,

    // ==================== 5xxx: Payment ====================
    /// Payment not found
    PaymentNotFound = 5006,

    // ==================== 6xxx: Menu / Product / Import ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Menu category not found
    CategoryNotFound = 6101,
    /// Dish not found
    DishNotFound = 6201,
    /// Dish ingredient not found
    DishIngredientNotFound = 6202,
    /// Unsupported upload format
    UnsupportedFileFormat = 6502,
    /// Upload without a file part
    NoFileProvided = 6504,
    /// Import batch exceeds the configured record limit
    ImportBatchTooLarge = 6901,

    // ==================== 7xxx: Table / Reservation / Shift ====================
    /// Table not found
    TableNotFound = 7001,
    /// Shift not found
    ShiftNotFound = 7201,
    /// Shift already closed
    ShiftAlreadyClosed = 7202,
    /// Reservation not found
    ReservationNotFound = 7401,

    // ==================== 8xxx: Staff / Customer ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Role not found
    RoleNotFound = 8101,
    /// Role name already exists
    RoleNameExists = 8102,
    /// Customer not found
    CustomerNotFound = 8201,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::ConstraintViolation => "Write rejected by a data constraint",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderStatusInvalid => "Unknown order status",
            ErrorCode::OrderStatusTransitionDenied => "Order status transition not allowed",

            // Payment
            ErrorCode::PaymentNotFound => "Payment not found",

            // Menu / Product / Import
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishIngredientNotFound => "Dish ingredient not found",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::ImportBatchTooLarge => "Import batch is too large",

            // Table / Reservation / Shift
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::ShiftNotFound => "Shift not found",
            ErrorCode::ShiftAlreadyClosed => "Shift is already closed",
            ErrorCode::ReservationNotFound => "Reservation not found",

            // Staff / Customer
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::RoleNotFound => "Role not found",
            ErrorCode::RoleNameExists => "Role name already exists",
            ErrorCode::CustomerNotFound => "Customer not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
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
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::ConstraintViolation),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4008 => Ok(ErrorCode::OrderStatusInvalid),
            4009 => Ok(ErrorCode::OrderStatusTransitionDenied),

            // Payment
            5006 => Ok(ErrorCode::PaymentNotFound),

            // Menu / Product / Import
            6001 => Ok(ErrorCode::ProductNotFound),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6201 => Ok(ErrorCode::DishNotFound),
            6202 => Ok(ErrorCode::DishIngredientNotFound),
            6502 => Ok(ErrorCode::UnsupportedFileFormat),
            6504 => Ok(ErrorCode::NoFileProvided),
            6901 => Ok(ErrorCode::ImportBatchTooLarge),

            // Table / Reservation / Shift
            7001 => Ok(ErrorCode::TableNotFound),
            7201 => Ok(ErrorCode::ShiftNotFound),
            7202 => Ok(ErrorCode::ShiftAlreadyClosed),
            7401 => Ok(ErrorCode::ReservationNotFound),

            // Staff / Customer
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8101 => Ok(ErrorCode::RoleNotFound),
            8102 => Ok(ErrorCode::RoleNameExists),
            8201 => Ok(ErrorCode::CustomerNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderItemNotFound.code(), 4006);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::TableNotFound.code(), 7001);
        assert_eq!(ErrorCode::CustomerNotFound.code(), 8201);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_matches_code() {
        // every variant must survive code() -> try_from()
        let all = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::ConstraintViolation,
            ErrorCode::OrderNotFound,
            ErrorCode::OrderItemNotFound,
            ErrorCode::OrderStatusInvalid,
            ErrorCode::OrderStatusTransitionDenied,
            ErrorCode::PaymentNotFound,
            ErrorCode::ProductNotFound,
            ErrorCode::CategoryNotFound,
            ErrorCode::DishNotFound,
            ErrorCode::DishIngredientNotFound,
            ErrorCode::UnsupportedFileFormat,
            ErrorCode::NoFileProvided,
            ErrorCode::ImportBatchTooLarge,
            ErrorCode::TableNotFound,
            ErrorCode::ShiftNotFound,
            ErrorCode::ShiftAlreadyClosed,
            ErrorCode::ReservationNotFound,
            ErrorCode::EmployeeNotFound,
            ErrorCode::RoleNotFound,
            ErrorCode::RoleNameExists,
            ErrorCode::CustomerNotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::TimeoutError,
            ErrorCode::ConfigError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(9999), Err(InvalidErrorCode(9999)));
        assert_eq!(
            InvalidErrorCode(42).to_string(),
            "invalid error code: 42"
        );
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("6901").unwrap();
        assert_eq!(code, ErrorCode::ImportBatchTooLarge);

        let result: Result<ErrorCode, _> = serde_json::from_str("12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "4001");
        assert_eq!(ErrorCode::OrderNotFound.message(), "Order not found");
        assert_eq!(ErrorCode::Success.message(), "Operation completed successfully");
    }
}
