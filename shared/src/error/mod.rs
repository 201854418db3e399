//! Unified error system
//!
//! - [`ErrorCode`]: numeric error codes shared by every endpoint
//! - [`ErrorCategory`]: classification of codes by domain
//! - [`AppError`]: error with code, message and optional details
//! - [`ApiResponse`]: JSON envelope used for error bodies
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu, product and import errors
//! - 7xxx: Table, reservation and shift errors
//! - 8xxx: Staff and customer errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::OrderNotFound);
//! let err = AppError::validation("table_id is required").with_detail("field", "table_id");
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
