//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 进程与数据库状态 |
//!
//! ```json
//! { "status": "ok", "db": "ok" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// ok | unavailable
    db: &'static str,
}

/// GET /health - 健康检查
///
/// Always 200 while the process serves requests; `db` reports whether a
/// pooled connection could be acquired.
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db = if state.pool().acquire().await.is_ok() {
        "ok"
    } else {
        "unavailable"
    };
    Json(HealthResponse { status: "ok", db })
}
