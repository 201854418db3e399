//! Dish Model

use serde::{Deserialize, Serialize};

/// Dish on the menu, unique by `(category_id, name)`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub price: f64,
    pub cook_time_minutes: i32,
    pub is_active: bool,
    pub description: Option<String>,
}

/// Upsert dish payload (keyed on `(category_id, name)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishUpsert {
    pub category_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub cook_time_minutes: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub description: Option<String>,
}

/// Update dish payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub cook_time_minutes: Option<i32>,
    pub is_active: Option<bool>,
    pub description: Option<String>,
}

/// Product consumed by one portion of a dish
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DishIngredient {
    pub id: i64,
    pub dish_id: i64,
    pub product_id: i64,
    pub quantity: f64,
}

/// Upsert ingredient payload (keyed on `(dish_id, product_id)`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishIngredientUpsert {
    pub product_id: i64,
    pub quantity: f64,
}

fn default_true() -> bool {
    true
}
