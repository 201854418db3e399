//! Payment API 模块 (每单一笔支付)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::upsert))
        .route("/{order_id}", get(handler::get_by_order).delete(handler::delete))
}
