//! Repository error → [`AppError`]
//!
//! | RepoError   | ErrorCode           | HTTP |
//! |-------------|---------------------|------|
//! | NotFound    | NotFound            | 404  |
//! | Duplicate   | AlreadyExists       | 409  |
//! | Constraint  | ConstraintViolation | 400  |
//! | Validation  | ValidationFailed    | 400  |
//! | Database    | DatabaseError       | 500  |
//!
//! Database errors are logged here and answered with an opaque message.

use crate::db::repository::RepoError;
use shared::error::{AppError, ErrorCode};

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Constraint(msg) => {
                AppError::with_message(ErrorCode::ConstraintViolation, msg)
            }
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                AppError::database("Database error")
            }
        }
    }
}

/// Like `AppError::from`, but reports not-found with an entity-specific code
///
/// ```ignore
/// employee::delete(&state.db.pool, id)
///     .await
///     .map_err(not_found_as(ErrorCode::EmployeeNotFound))?;
/// ```
pub fn not_found_as(code: ErrorCode) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound(msg) => AppError::with_message(code, msg),
        other => other.into(),
    }
}
