//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
///
/// `table_number` is the natural key used by upserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub table_number: i32,
    pub seats: i32,
    pub is_active: bool,
    pub description: Option<String>,
}

/// Upsert dining table payload (keyed on `table_number`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpsert {
    pub table_number: i32,
    #[serde(default = "default_seats")]
    pub seats: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub description: Option<String>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub table_number: Option<i32>,
    pub seats: Option<i32>,
    pub is_active: Option<bool>,
    pub description: Option<String>,
}

fn default_seats() -> i32 {
    4
}

fn default_true() -> bool {
    true
}
