//! OrdersManager - unit-of-work operations on orders and their items
//!
//! Every method borrows one pooled connection (or one transaction) for the
//! duration of the call. Nothing is retried here; a failed call has either
//! committed fully or left no trace.

mod error;

pub use error::{ManagerError, ManagerResult};

use super::status::StatusPolicy;
use crate::db::repository::order as order_repo;
use shared::models::{Order, OrderDraft, OrderItem, OrderItemInput, OrderWithItems};
use sqlx::SqlitePool;

/// Order transaction manager
#[derive(Clone)]
pub struct OrdersManager {
    pool: SqlitePool,
    policy: StatusPolicy,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("policy", &self.policy)
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

impl OrdersManager {
    pub fn new(pool: SqlitePool, policy: StatusPolicy) -> Self {
        Self { pool, policy }
    }

    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Create an order and all its items atomically.
    ///
    /// Items repeating a dish collapse into one line holding the last
    /// occurrence's values. On any failure, or if this future is dropped
    /// before it resolves, the transaction rolls back and no order exists.
    pub async fn create_order_with_items(
        &self,
        draft: &OrderDraft,
        items: &[OrderItemInput],
    ) -> ManagerResult<OrderWithItems> {
        let status = self.policy.initial(draft.initial_status())?;

        let mut tx = self.pool.begin().await?;
        let order = order_repo::insert(&mut *tx, draft, &status).await?;
        for item in items {
            order_repo::upsert_item(&mut *tx, order.id, item).await?;
        }
        let items = order_repo::find_items(&mut *tx, order.id).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = order.id,
            table_id = order.table_id,
            items = items.len(),
            status = %order.status,
            "Order created"
        );
        Ok(OrderWithItems { order, items })
    }

    /// Change an order's status.
    ///
    /// Permissive policy writes unconditionally. Strict policy validates the
    /// transition against the stored status and writes with a
    /// compare-and-set, so a concurrent change surfaces as
    /// [`ManagerError::StatusConflict`] instead of being overwritten.
    pub async fn update_status(&self, order_id: i64, status: &str) -> ManagerResult<Order> {
        let order = if self.policy.is_strict() {
            let current = order_repo::find_by_id(&self.pool, order_id)
                .await?
                .ok_or(ManagerError::OrderNotFound(order_id))?;
            let next = self.policy.transition(&current.status, status)?;
            order_repo::update_status(&self.pool, order_id, &next, Some(&current.status))
                .await?
                .ok_or(ManagerError::StatusConflict(order_id))?
        } else {
            let next = self.policy.transition("", status)?;
            order_repo::update_status(&self.pool, order_id, &next, None)
                .await?
                .ok_or(ManagerError::OrderNotFound(order_id))?
        };

        tracing::info!(order_id, status = %order.status, "Order status updated");
        Ok(order)
    }

    /// Insert or overwrite the line for `(order_id, item.dish_id)`
    pub async fn upsert_item(
        &self,
        order_id: i64,
        item: &OrderItemInput,
    ) -> ManagerResult<OrderItem> {
        let line = order_repo::upsert_item(&self.pool, order_id, item).await?;
        tracing::debug!(order_id, dish_id = item.dish_id, quantity = line.quantity, "Order item upserted");
        Ok(line)
    }

    pub async fn delete_item(&self, order_id: i64, item_id: i64) -> ManagerResult<()> {
        match order_repo::delete_item(&self.pool, order_id, item_id).await {
            Ok(()) => Ok(()),
            Err(crate::db::repository::RepoError::NotFound(_)) => {
                Err(ManagerError::ItemNotFound { order_id, item_id })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Items of one order in insertion order; unknown orders yield an empty list
    pub async fn list_items(&self, order_id: i64) -> ManagerResult<Vec<OrderItem>> {
        Ok(order_repo::find_items(&self.pool, order_id).await?)
    }

    pub async fn list_orders(&self, status: Option<&str>, limit: i64) -> ManagerResult<Vec<Order>> {
        Ok(order_repo::find_all(&self.pool, status, limit).await?)
    }

    pub async fn get_order(&self, order_id: i64) -> ManagerResult<OrderWithItems> {
        let order = order_repo::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(ManagerError::OrderNotFound(order_id))?;
        let items = order_repo::find_items(&self.pool, order_id).await?;
        Ok(OrderWithItems { order, items })
    }
}
