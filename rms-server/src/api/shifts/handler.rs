//! Shift API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::LimitQuery;
use crate::db::repository::{RepoError, shift};
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_NOTE_LEN, validate_id, validate_non_negative, validate_optional_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Shift, ShiftClose, ShiftOpen};
use shared::util::clamp_limit;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 500;

fn shift_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ShiftNotFound, format!("Shift {id} not found"))
}

/// GET /api/shifts - 班次列表 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Shift>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let shifts = shift::find_all(state.pool(), limit).await?;
    Ok(Json(shifts))
}

/// GET /api/shifts/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Shift>> {
    let found = shift::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| shift_not_found(id))?;
    Ok(Json(found))
}

/// POST /api/shifts - 开班
pub async fn open(
    State(state): State<ServerState>,
    Json(payload): Json<ShiftOpen>,
) -> AppResult<(StatusCode, Json<Shift>)> {
    validate_id(payload.opened_by, "opened_by")?;
    validate_non_negative(payload.expected_revenue, "expected_revenue")?;
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;

    let opened = shift::open(state.pool(), payload).await?;
    tracing::info!(shift_id = opened.id, opened_by = opened.opened_by, "Shift opened");
    Ok((StatusCode::CREATED, Json(opened)))
}

/// POST /api/shifts/{id}/close - 交班
pub async fn close(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ShiftClose>,
) -> AppResult<Json<Shift>> {
    validate_id(payload.closed_by, "closed_by")?;
    validate_non_negative(payload.actual_revenue, "actual_revenue")?;
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;

    match shift::close(state.pool(), id, payload).await {
        Ok(closed) => {
            tracing::info!(shift_id = id, actual_revenue = ?closed.actual_revenue, "Shift closed");
            Ok(Json(closed))
        }
        // zero rows: either no such shift or it is no longer open
        Err(RepoError::NotFound(_)) => match shift::find_by_id(state.pool(), id).await? {
            Some(_) => Err(AppError::with_message(
                ErrorCode::ShiftAlreadyClosed,
                format!("Shift {id} is already closed"),
            )),
            None => Err(shift_not_found(id)),
        },
        Err(e) => Err(e.into()),
    }
}
