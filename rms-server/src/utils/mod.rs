//! 工具模块 - 通用工具函数和类型
//!
//! - [`error`] - repository → API error mapping
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - boundary checks used by the HTTP handlers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::not_found_as;
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
