//! Payment Model

use serde::{Deserialize, Serialize};

/// Status given to payments recorded without one
pub const DEFAULT_PAYMENT_STATUS: &str = "paid";

/// Payment of an order, at most one per order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub amount: f64,
    /// cash, card, ...
    pub method: String,
    pub paid_at: i64,
    pub status: String,
}

/// Upsert payment payload (keyed on `order_id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUpsert {
    pub order_id: i64,
    pub amount: f64,
    pub method: String,
    /// Defaults to now
    pub paid_at: Option<i64>,
    pub status: Option<String>,
}
