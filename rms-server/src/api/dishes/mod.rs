//! Dish API 模块 (菜品与配料)

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dishes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::upsert))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{id}/ingredients",
            get(handler::list_ingredients).post(handler::upsert_ingredient),
        )
        .route(
            "/{id}/ingredients/{product_id}",
            delete(handler::delete_ingredient),
        )
}
