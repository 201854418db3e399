//! Role API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::db::repository::{RepoError, role};
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Role, RoleCreate};

/// GET /api/roles - 获取所有角色
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Role>>> {
    let roles = role::find_all(state.pool()).await?;
    Ok(Json(roles))
}

/// POST /api/roles - 创建角色
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<(StatusCode, Json<Role>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let created = role::create(state.pool(), payload).await.map_err(|e| match e {
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::RoleNameExists, msg),
        other => other.into(),
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}
