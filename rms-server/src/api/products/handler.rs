//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::LimitQuery;
use crate::db::repository::product;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{Product, ProductDraft, ProductStock, ProductStockSet, ProductUpdate};
use shared::util::clamp_limit;

const DEFAULT_LIMIT: i64 = 200;
const MAX_LIMIT: i64 = 500;

fn product_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
}

/// GET /api/products - 获取原料列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let products = product::find_all(state.pool(), limit).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let found = product::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    Ok(Json(found))
}

/// POST /api/products - 创建或按名称更新原料
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<ProductDraft>,
) -> AppResult<Json<Product>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.unit, "unit", MAX_SHORT_TEXT_LEN)?;
    if let Some(cost) = payload.cost_price {
        validate_non_negative(cost, "cost_price")?;
    }

    let saved = product::upsert_one(state.pool(), &payload).await?;
    Ok(Json(saved))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(unit) = &payload.unit {
        validate_required_text(unit, "unit", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(cost) = payload.cost_price {
        validate_non_negative(cost, "cost_price")?;
    }

    let saved = product::update(state.pool(), id, payload)
        .await
        .map_err(not_found_as(ErrorCode::ProductNotFound))?;
    Ok(Json(saved))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    product::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::ProductNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/{id}/stock - 库存
///
/// A product without a stock record has zero stock.
pub async fn get_stock(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductStock>> {
    if let Some(stock) = product::find_stock(state.pool(), id).await? {
        return Ok(Json(stock));
    }
    if product::find_by_id(state.pool(), id).await?.is_none() {
        return Err(product_not_found(id));
    }
    Ok(Json(ProductStock {
        product_id: id,
        quantity: 0.0,
        updated_at: 0,
    }))
}

/// PUT /api/products/{id}/stock - 设置库存
pub async fn set_stock(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductStockSet>,
) -> AppResult<Json<ProductStock>> {
    validate_non_negative(payload.quantity, "quantity")?;

    let stock = product::set_stock(state.pool(), id, payload.quantity)
        .await
        .map_err(not_found_as(ErrorCode::ProductNotFound))?;
    Ok(Json(stock))
}
