//! Repository Module
//!
//! Data access per entity family, as free async functions over a
//! `SqlitePool` (or any SQLite executor when a statement must also run
//! inside a caller-owned transaction).

// People
pub mod customer;
pub mod employee;
pub mod role;

// Floor
pub mod dining_table;
pub mod reservation;
pub mod shift;

// Menu & inventory
pub mod dish;
pub mod menu_category;
pub mod product;

// Orders
pub mod order;
pub mod payment;

// Import & reports
pub mod import_error;
pub mod report;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique key conflict
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Foreign key, check or not-null constraint rejected the write
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Constraint class of a store error, `None` for anything that is not a
/// constraint rejection (I/O, pool, busy, protocol, ...)
pub fn constraint_kind(err: &sqlx::Error) -> Option<ErrorKind> {
    match err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            kind @ (ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation) => Some(kind),
            _ => None,
        },
        _ => None,
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match constraint_kind(&err) {
            Some(ErrorKind::UniqueViolation) => RepoError::Duplicate(store_message(&err)),
            Some(_) => RepoError::Constraint(store_message(&err)),
            None => match err {
                sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
                other => RepoError::Database(other.to_string()),
            },
        }
    }
}

/// The store's own error text, without the driver's wrapping
pub fn store_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
