//! Order Transaction Manager
//!
//! Orders and their line items are the only multi-statement writes in the
//! back-office. Everything that must be all-or-nothing goes through
//! [`OrdersManager`]:
//!
//! - **manager**: unit-of-work operations over the pool
//! - **status**: status vocabulary, transition table and enforcement policy
//!
//! # Consistency
//!
//! ```text
//! create_order_with_items
//!   BEGIN ─► INSERT order ─► UPSERT item × N ─► SELECT items ─► COMMIT
//!     └──── any error, or the caller's future dropped ─► ROLLBACK
//! ```
//!
//! Single-item writes are one `INSERT .. ON CONFLICT` statement, so
//! concurrent writers to the same `(order_id, dish_id)` never produce
//! duplicate lines.

pub mod manager;
pub mod status;

pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use status::{OrderStatus, StatusError, StatusPolicy};
