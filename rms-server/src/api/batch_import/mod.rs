//! Batch Import API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/batch-import/products | POST | JSON 数组或 multipart CSV 文件 |
//! | /api/batch-import/errors | GET | 导入错误日志 (?limit=) |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::ServerState;

/// Upload ceiling for import bodies; other routes keep the global limit
pub const IMPORT_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/batch-import", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/products",
            post(handler::import_products).layer(DefaultBodyLimit::max(IMPORT_BODY_LIMIT)),
        )
        .route("/errors", get(handler::list_errors))
}
