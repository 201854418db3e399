//! Report rows, read from the aggregate views

use serde::{Deserialize, Serialize};

/// Revenue per shift (`view_shift_revenue`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShiftRevenue {
    pub shift_id: i64,
    pub opened_at: i64,
    pub closed_at: Option<i64>,
    pub orders_count: i64,
    pub total_revenue: f64,
    /// Absent when the shift has no paid orders
    pub avg_check: Option<f64>,
}

/// Orders and revenue handled by each waiter (`view_waiter_performance`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WaiterPerformance {
    pub waiter_id: i64,
    pub full_name: String,
    pub orders_count: i64,
    pub total_revenue: f64,
    pub avg_check: Option<f64>,
}

/// Whether a dish can be ordered given ingredient availability
/// (`view_dishes_availability`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DishAvailability {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
    pub all_products_available: bool,
    pub can_be_ordered: bool,
}
