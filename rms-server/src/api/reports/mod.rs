//! Report API 模块 - 只读聚合视图

use axum::{Json, Router, extract::State, routing::get};

use crate::db::repository::report;
use crate::state::ServerState;
use crate::utils::AppResult;
use shared::models::{DishAvailability, ShiftRevenue, WaiterPerformance};

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/reports",
        Router::new()
            .route("/shift-revenue", get(shift_revenue))
            .route("/waiters", get(waiters))
            .route("/dishes-availability", get(dishes_availability)),
    )
}

/// GET /api/reports/shift-revenue - 班次营收
async fn shift_revenue(State(state): State<ServerState>) -> AppResult<Json<Vec<ShiftRevenue>>> {
    Ok(Json(report::shift_revenue(state.pool()).await?))
}

/// GET /api/reports/waiters - 服务员业绩
async fn waiters(State(state): State<ServerState>) -> AppResult<Json<Vec<WaiterPerformance>>> {
    Ok(Json(report::waiter_performance(state.pool()).await?))
}

/// GET /api/reports/dishes-availability - 菜品可售情况
async fn dishes_availability(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DishAvailability>>> {
    Ok(Json(report::dishes_availability(state.pool()).await?))
}
