//! Menu Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::repository::menu_category;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{MenuCategory, MenuCategoryUpdate, MenuCategoryUpsert};

/// GET /api/menu-categories - 获取所有分类 (按 sort_order, name 排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuCategory>>> {
    let categories = menu_category::find_all(state.pool()).await?;
    Ok(Json(categories))
}

/// GET /api/menu-categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuCategory>> {
    let category = menu_category::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::CategoryNotFound, format!("Category {id} not found"))
        })?;
    Ok(Json(category))
}

/// POST /api/menu-categories - 创建或按名称更新分类
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCategoryUpsert>,
) -> AppResult<Json<MenuCategory>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let category = menu_category::upsert(state.pool(), payload).await?;
    Ok(Json(category))
}

/// PUT /api/menu-categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuCategoryUpdate>,
) -> AppResult<Json<MenuCategory>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let category = menu_category::update(state.pool(), id, payload)
        .await
        .map_err(not_found_as(ErrorCode::CategoryNotFound))?;
    Ok(Json(category))
}

/// DELETE /api/menu-categories/{id}
///
/// Categories still referenced by dishes are refused by the store.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    menu_category::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::CategoryNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
