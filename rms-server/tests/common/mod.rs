//! 集成测试公共工具
//!
//! Every test gets its own migrated SQLite file in a temp dir.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http_body_util::BodyExt;
use rms_server::config::DbConfig;
use rms_server::db::DbService;
use rms_server::{Config, ServerState, api};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub struct TestEnv {
    /// Keeps the database file alive
    pub dir: TempDir,
    pub state: ServerState,
}

impl TestEnv {
    pub fn pool(&self) -> &SqlitePool {
        self.state.pool()
    }

    pub fn app(&self) -> Router {
        api::build_app(self.state.clone())
    }
}

pub async fn setup() -> TestEnv {
    setup_with(|_| {}).await
}

pub async fn setup_with(configure: impl FnOnce(&mut Config)) -> TestEnv {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config {
        db: DbConfig {
            path: dir.path().join("rms.db"),
            max_connections: 8,
            min_connections: 1,
            ..DbConfig::default()
        },
        ..Config::default()
    };
    configure(&mut config);

    let db = DbService::new(&config.db).await.unwrap();
    TestEnv {
        dir,
        state: ServerState::new(db, config),
    }
}

/// Seeded floor: one table, one waiter, three dishes in one category
pub struct Floor {
    pub table_id: i64,
    pub waiter_id: i64,
    pub dish_ids: Vec<i64>,
}

pub async fn seed_floor(pool: &SqlitePool) -> Floor {
    let table_id: i64 = sqlx::query_scalar(
        "INSERT INTO restaurant_tables (table_number, seats) VALUES (1, 4) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let waiter_id: i64 = sqlx::query_scalar(
        "INSERT INTO employees (full_name, phone, role_id) VALUES ('Marta', '600100200', 3) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let category_id: i64 =
        sqlx::query_scalar("INSERT INTO menu_categories (name) VALUES ('Kitchen') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();

    let mut dish_ids = Vec::new();
    for (name, price) in [("Borscht", 9.99), ("Pelmeni", 12.5), ("Kompot", 3.0)] {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO dishes (category_id, name, price) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(category_id)
        .bind(name)
        .bind(price)
        .fetch_one(pool)
        .await
        .unwrap();
        dish_ids.push(id);
    }

    Floor {
        table_id,
        waiter_id,
        dish_ids,
    }
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> http::Request<Body> {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> http::Request<Body> {
    http::Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
