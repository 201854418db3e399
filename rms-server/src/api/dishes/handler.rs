//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::db::repository::dish;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_id, validate_non_negative, validate_optional_id,
    validate_optional_text, validate_positive, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{Dish, DishIngredient, DishIngredientUpsert, DishUpdate, DishUpsert};
use shared::util::clamp_limit;

const DEFAULT_LIMIT: i64 = 200;
const MAX_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category_id: Option<i64>,
    pub limit: Option<i64>,
}

fn validate_cook_time(minutes: i32) -> AppResult<()> {
    if minutes < 0 {
        return Err(AppError::validation(format!(
            "cook_time_minutes must not be negative, got {minutes}"
        )));
    }
    Ok(())
}

/// GET /api/dishes - 获取菜品 (可按分类过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Dish>>> {
    let limit = clamp_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let dishes = dish::find_all(state.pool(), query.category_id, limit).await?;
    Ok(Json(dishes))
}

/// GET /api/dishes/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Dish>> {
    let found = dish::find_by_id(state.pool(), id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::DishNotFound, format!("Dish {id} not found"))
    })?;
    Ok(Json(found))
}

/// POST /api/dishes - 创建或按 (分类, 名称) 更新菜品
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<DishUpsert>,
) -> AppResult<Json<Dish>> {
    validate_id(payload.category_id, "category_id")?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_non_negative(payload.price, "price")?;
    validate_cook_time(payload.cook_time_minutes)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let saved = dish::upsert(state.pool(), payload).await?;
    Ok(Json(saved))
}

/// PUT /api/dishes/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DishUpdate>,
) -> AppResult<Json<Dish>> {
    validate_optional_id(payload.category_id, "category_id")?;
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_non_negative(price, "price")?;
    }
    if let Some(minutes) = payload.cook_time_minutes {
        validate_cook_time(minutes)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let saved = dish::update(state.pool(), id, payload)
        .await
        .map_err(not_found_as(ErrorCode::DishNotFound))?;
    Ok(Json(saved))
}

/// DELETE /api/dishes/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    dish::delete(state.pool(), id)
        .await
        .map_err(not_found_as(ErrorCode::DishNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/dishes/{id}/ingredients - 菜品配料
pub async fn list_ingredients(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<DishIngredient>>> {
    let ingredients = dish::find_ingredients(state.pool(), id).await?;
    Ok(Json(ingredients))
}

/// POST /api/dishes/{id}/ingredients - 添加或更新配料用量
pub async fn upsert_ingredient(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DishIngredientUpsert>,
) -> AppResult<Json<DishIngredient>> {
    validate_id(payload.product_id, "product_id")?;
    validate_positive(payload.quantity, "quantity")?;

    let ingredient = dish::upsert_ingredient(state.pool(), id, payload).await?;
    Ok(Json(ingredient))
}

/// DELETE /api/dishes/{id}/ingredients/{product_id}
pub async fn delete_ingredient(
    State(state): State<ServerState>,
    Path((id, product_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    dish::delete_ingredient(state.pool(), id, product_id)
        .await
        .map_err(not_found_as(ErrorCode::DishIngredientNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
