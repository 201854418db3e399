//! Batch import models

use serde::{Deserialize, Serialize};

/// Entity tag of product import errors
pub const IMPORT_ENTITY_PRODUCT: &str = "product";

/// Append-only record of a rejected import candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ImportError {
    pub id: i64,
    pub created_at: i64,
    /// Entity kind, e.g. `product`
    pub entity: String,
    /// JSON serialization of the offending record
    pub raw_data: String,
    pub error_message: String,
}

/// Tally returned by a batch import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub total: usize,
}
