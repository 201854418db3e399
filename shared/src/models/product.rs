//! Product Model (原料 / inventory products)

use serde::{Deserialize, Serialize};

/// Product entity, unique by `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit of measure (kg, pcs, l, ...)
    pub unit: String,
    pub cost_price: Option<f64>,
    pub is_available: bool,
}

/// Product draft
///
/// Payload of the product upsert endpoint and the candidate record of a
/// batch import. Missing or null fields deserialize to their empty values so
/// that incomplete records reach validation instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub unit: String,
    pub cost_price: Option<f64>,
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub is_available: bool,
}


/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub cost_price: Option<f64>,
    pub is_available: Option<bool>,
}

/// Stock level of a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductStock {
    pub product_id: i64,
    pub quantity: f64,
    pub updated_at: i64,
}

/// Set stock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStockSet {
    pub quantity: f64,
}
