//! Reservation API Handlers
//!
//! Reservation status is a free-form string (default `booked`).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::db::repository::reservation;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_SHORT_TEXT_LEN, validate_id, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{Reservation, ReservationCreate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub status: String,
}

/// GET /api/reservations - 获取预订 (可按状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let status = query.status.as_deref().filter(|s| !s.is_empty());
    let reservations = reservation::find_all(state.pool(), status).await?;
    Ok(Json(reservations))
}

/// POST /api/reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    validate_id(payload.customer_id, "customer_id")?;
    validate_id(payload.table_id, "table_id")?;
    if payload.reserved_to <= payload.reserved_from {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "reserved_to must be after reserved_from",
        ));
    }
    validate_optional_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;

    let created = reservation::create(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/reservations/{id}/status?status= - 更新预订状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<Reservation>> {
    validate_required_text(&query.status, "status", MAX_SHORT_TEXT_LEN)?;

    let updated = reservation::update_status(state.pool(), id, query.status.trim())
        .await
        .map_err(not_found_as(ErrorCode::ReservationNotFound))?;
    Ok(Json(updated))
}

/// DELETE /api/reservations/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    reservation::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::ReservationNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
