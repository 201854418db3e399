//! Reservation Model

use serde::{Deserialize, Serialize};

/// Status given to reservations created without one
pub const DEFAULT_RESERVATION_STATUS: &str = "booked";

/// Table reservation (预订)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub table_id: i64,
    pub reserved_from: i64,
    pub reserved_to: i64,
    /// Free-form status string
    pub status: String,
    pub created_at: i64,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub customer_id: i64,
    pub table_id: i64,
    pub reserved_from: i64,
    pub reserved_to: i64,
    pub status: Option<String>,
}
