//! Reservation API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::delete))
        .route("/{id}/status", put(handler::update_status))
}
