//! rms-server - restaurant back-office API
//!
//! - [`orders`]: atomic order creation, item upserts, status policy
//! - [`import`]: batch product import with a durable error log
//! - [`db`]: SQLite pool, migrations and per-entity repositories
//! - [`api`]: axum routes and middleware stack

pub mod api;
pub mod config;
pub mod db;
pub mod import;
pub mod middleware;
pub mod orders;
pub mod state;
pub mod utils;

pub use config::Config;
pub use state::ServerState;
