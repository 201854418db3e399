//! Shift Model (班次管理)

use serde::{Deserialize, Serialize};

pub const SHIFT_OPEN: &str = "open";
pub const SHIFT_CLOSED: &str = "closed";

/// Accounting period bounding a set of orders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shift {
    pub id: i64,
    pub opened_by: i64,
    pub closed_by: Option<i64>,
    pub opened_at: i64,
    pub closed_at: Option<i64>,
    /// `open` or `closed`
    pub status: String,
    pub note: Option<String>,
    pub expected_revenue: f64,
    pub actual_revenue: Option<f64>,
}

/// Open shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftOpen {
    pub opened_by: i64,
    pub note: Option<String>,
    #[serde(default)]
    pub expected_revenue: f64,
}

/// Close shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftClose {
    pub closed_by: i64,
    pub actual_revenue: f64,
    pub note: Option<String>,
}
