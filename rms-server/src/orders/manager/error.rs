use super::super::status::StatusError;
use crate::db::repository::RepoError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    #[error("Item {item_id} not found in order {order_id}")]
    ItemNotFound { order_id: i64, item_id: i64 },

    #[error(transparent)]
    Status(#[from] StatusError),

    /// Compare-and-set lost: the status changed between read and write
    #[error("Order {0} status changed concurrently")]
    StatusConflict(i64),
}

impl From<sqlx::Error> for ManagerError {
    fn from(err: sqlx::Error) -> Self {
        ManagerError::Repo(err.into())
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Repo(e) => e.into(),
            ManagerError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
                    .with_detail("order_id", id)
            }
            ManagerError::ItemNotFound { order_id, item_id } => AppError::with_message(
                ErrorCode::OrderItemNotFound,
                format!("Order item {item_id} not found in order {order_id}"),
            )
            .with_detail("order_id", order_id)
            .with_detail("item_id", item_id),
            ManagerError::Status(e @ StatusError::TransitionDenied { .. }) => {
                AppError::with_message(ErrorCode::OrderStatusTransitionDenied, e.to_string())
            }
            ManagerError::Status(e) => {
                AppError::with_message(ErrorCode::OrderStatusInvalid, e.to_string())
            }
            ManagerError::StatusConflict(id) => AppError::with_message(
                ErrorCode::OrderStatusTransitionDenied,
                format!("Order {id} status changed concurrently, reload and retry"),
            )
            .with_detail("order_id", id),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
