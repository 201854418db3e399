//! Dining Table API Handlers
//!
//! `POST` upserts by `table_number`; `PUT /{id}` edits one table by id.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::repository::dining_table;
use crate::state::ServerState;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{DiningTable, DiningTableUpdate, DiningTableUpsert};

fn validate_positive_int(value: i32, field: &str) -> AppResult<()> {
    if value <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(state.pool()).await?;
    Ok(Json(tables))
}

/// GET /api/tables/{id} - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::TableNotFound, format!("Table {id} not found"))
        })?;
    Ok(Json(table))
}

/// POST /api/tables - 创建或按桌号更新桌台
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableUpsert>,
) -> AppResult<Json<DiningTable>> {
    validate_positive_int(payload.table_number, "table_number")?;
    validate_positive_int(payload.seats, "seats")?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let table = dining_table::upsert(state.pool(), payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/{id} - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(number) = payload.table_number {
        validate_positive_int(number, "table_number")?;
    }
    if let Some(seats) = payload.seats {
        validate_positive_int(seats, "seats")?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let table = dining_table::update(state.pool(), id, payload)
        .await
        .map_err(not_found_as(ErrorCode::TableNotFound))?;
    Ok(Json(table))
}

/// DELETE /api/tables/{id} - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    dining_table::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::TableNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
