//! Data models
//!
//! Shared between the server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are epoch millis.

pub mod customer;
pub mod dining_table;
pub mod dish;
pub mod employee;
pub mod import;
pub mod menu_category;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;
pub mod reservation;
pub mod role;
pub mod shift;

// Re-exports
pub use customer::*;
pub use dining_table::*;
pub use dish::*;
pub use employee::*;
pub use import::*;
pub use menu_category::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use report::*;
pub use reservation::*;
pub use role::*;
pub use shift::*;
