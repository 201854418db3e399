//! Order API Handlers
//!
//! Boundary checks live here; atomicity and status policy live in
//! [`crate::orders::OrdersManager`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::state::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_id, validate_non_negative,
    validate_optional_id, validate_optional_text, validate_required_text,
};
use shared::error::AppError;
use shared::models::{CreateOrderRequest, Order, OrderItem, OrderItemInput, OrderWithItems};
use shared::util::clamp_limit;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 300;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: String,
}

fn validate_item(item: &OrderItemInput) -> AppResult<()> {
    validate_id(item.dish_id, "dish_id")?;
    if item.quantity <= 0 {
        return Err(AppError::validation(format!(
            "quantity must be greater than zero, got {}",
            item.quantity
        )));
    }
    validate_non_negative(item.price_at_moment, "price_at_moment")?;
    validate_optional_text(&item.comment, "comment", MAX_NOTE_LEN)
}

/// GET /api/orders - 订单列表 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let status = query.status.as_deref().filter(|s| !s.is_empty());
    let orders = state.orders.list_orders(status, limit).await?;
    Ok(Json(orders))
}

/// POST /api/orders - 创建订单 (订单与明细同一事务)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderWithItems>)> {
    let draft = &payload.order;
    validate_id(draft.table_id, "table_id")?;
    validate_id(draft.waiter_id, "waiter_id")?;
    validate_optional_id(draft.customer_id, "customer_id")?;
    validate_optional_id(draft.reservation_id, "reservation_id")?;
    validate_optional_id(draft.shift_id, "shift_id")?;
    validate_optional_text(&draft.status, "status", MAX_SHORT_TEXT_LEN)?;
    for item in &payload.items {
        validate_item(item)?;
    }

    let created = state
        .orders
        .create_order_with_items(draft, &payload.items)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/orders/{id} - 订单及明细
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderWithItems>> {
    let order = state.orders.get_order(id).await?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}/status?status= - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Order>> {
    validate_required_text(&query.status, "status", MAX_SHORT_TEXT_LEN)?;

    let order = state.orders.update_status(id, &query.status).await?;
    Ok(Json(order))
}

/// GET /api/orders/{id}/items - 订单明细
pub async fn list_items(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let items = state.orders.list_items(id).await?;
    Ok(Json(items))
}

/// POST /api/orders/{id}/items - 添加或更新明细 (按菜品)
pub async fn upsert_item(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderItemInput>,
) -> AppResult<Json<OrderItem>> {
    validate_item(&payload)?;

    let item = state.orders.upsert_item(id, &payload).await?;
    Ok(Json(item))
}

/// DELETE /api/orders/{id}/items/{item_id} - 删除明细
pub async fn delete_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.orders.delete_item(id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
