//! Shared types for the restaurant back-office server
//!
//! Domain models exchanged over the HTTP API, the unified error system,
//! and small utilities used by the server crate and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
