//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | GET | 订单列表 (?status=&limit=) |
//! | /api/orders | POST | 创建订单及明细 (原子) |
//! | /api/orders/{id} | GET | 订单及明细 |
//! | /api/orders/{id}/status | PUT | 更新状态 (?status=) |
//! | /api/orders/{id}/items | GET, POST | 明细列表 / 添加或更新明细 |
//! | /api/orders/{id}/items/{item_id} | DELETE | 删除明细 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/items", get(handler::list_items).post(handler::upsert_item))
        .route("/{id}/items/{item_id}", delete(handler::delete_item))
}
