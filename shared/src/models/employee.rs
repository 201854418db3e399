//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity (员工)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub role_id: i64,
    pub hired_at: i64,
    pub is_active: bool,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub role_id: i64,
    /// Defaults to now
    pub hired_at: Option<i64>,
    pub is_active: Option<bool>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}
