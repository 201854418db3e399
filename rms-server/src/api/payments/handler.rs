//! Payment API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::repository::payment;
use crate::state::ServerState;
use crate::utils::validation::{
    MAX_SHORT_TEXT_LEN, validate_id, validate_non_negative, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, not_found_as};
use shared::models::{Payment, PaymentUpsert};

/// POST /api/payments - 记录支付 (同一订单再次提交则覆盖)
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentUpsert>,
) -> AppResult<Json<Payment>> {
    validate_id(payload.order_id, "order_id")?;
    validate_non_negative(payload.amount, "amount")?;
    validate_required_text(&payload.method, "method", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;

    let saved = payment::upsert(state.pool(), payload).await?;
    tracing::info!(order_id = saved.order_id, amount = saved.amount, method = %saved.method, "Payment recorded");
    Ok(Json(saved))
}

/// GET /api/payments/{order_id}
pub async fn get_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<i64>,
) -> AppResult<Json<Payment>> {
    let found = payment::find_by_order(state.pool(), order_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::PaymentNotFound,
                format!("Payment for order {order_id} not found"),
            )
        })?;
    Ok(Json(found))
}

/// DELETE /api/payments/{order_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<i64>,
) -> AppResult<StatusCode> {
    payment::delete_by_order(state.pool(), order_id)
        .await
        .map_err(not_found_as(ErrorCode::PaymentNotFound))?;
    Ok(StatusCode::NO_CONTENT)
}
