//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::LimitQuery;
use crate::db::repository::customer;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::util::clamp_limit;

const DEFAULT_LIMIT: i64 = 200;
const MAX_LIMIT: i64 = 500;

fn validate_vip_level(level: Option<i32>) -> AppResult<()> {
    if let Some(level) = level
        && level < 0
    {
        return Err(AppError::validation(format!(
            "vip_level must not be negative, got {level}"
        )));
    }
    Ok(())
}

/// GET /api/customers - 获取顾客列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let customers = customer::find_all(state.pool(), limit).await?;
    Ok(Json(customers))
}

/// GET /api/customers/{id} - 获取单个顾客
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let found = customer::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::CustomerNotFound, format!("Customer {id} not found"))
        })?;
    Ok(Json(found))
}

/// POST /api/customers - 创建顾客
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    validate_required_text(&payload.full_name, "full_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_vip_level(payload.vip_level)?;

    let created = customer::create(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/customers/{id} - 更新顾客 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    if let Some(name) = &payload.full_name {
        validate_required_text(name, "full_name", MAX_NAME_LEN)?;
    }
    if let Some(phone) = &payload.phone {
        validate_required_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_vip_level(payload.vip_level)?;

    let updated = customer::update(state.pool(), id, payload)
        .await
        .map_err(not_found_as(ErrorCode::CustomerNotFound))?;
    Ok(Json(updated))
}

/// DELETE /api/customers/{id} - 删除顾客
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    customer::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::CustomerNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
