//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::db::repository::employee;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_id, validate_optional_id,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Only active employees when true
    #[serde(default)]
    pub active: bool,
}

/// GET /api/employees - 获取员工列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(state.pool(), query.active).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let found = employee::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
        })?;
    Ok(Json(found))
}

/// POST /api/employees - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_required_text(&payload.full_name, "full_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_id(payload.role_id, "role_id")?;

    let created = employee::create(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/employees/{id} - 更新员工 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(name) = &payload.full_name {
        validate_required_text(name, "full_name", MAX_NAME_LEN)?;
    }
    if let Some(phone) = &payload.phone {
        validate_required_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_id(payload.role_id, "role_id")?;

    let updated = employee::update(state.pool(), id, payload)
        .await
        .map_err(not_found_as(ErrorCode::EmployeeNotFound))?;
    Ok(Json(updated))
}

/// DELETE /api/employees/{id} - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    employee::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::EmployeeNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
