//! Order Repository
//!
//! Statement-level access to `orders` and `order_items`. Multi-statement
//! units of work (create with items, strict status changes) are composed by
//! [`crate::orders::OrdersManager`], which passes its transaction in as the
//! executor.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderDraft, OrderItem, OrderItemInput};
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str =
    "id, table_id, customer_id, waiter_id, reservation_id, shift_id, created_at, status";
const ITEM_COLUMNS: &str = "id, order_id, dish_id, quantity, price_at_moment, comment";

/// Insert the order header; `created_at` is assigned by the store
pub async fn insert(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    draft: &OrderDraft,
    status: &str,
) -> Result<Order, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "INSERT INTO orders (table_id, customer_id, waiter_id, reservation_id, shift_id, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {ORDER_COLUMNS}"
    ))
    .bind(draft.table_id)
    .bind(draft.customer_id)
    .bind(draft.waiter_id)
    .bind(draft.reservation_id)
    .bind(draft.shift_id)
    .bind(status)
    .fetch_one(conn)
    .await
}

/// Insert or overwrite the line for `(order_id, dish_id)`.
///
/// Single statement, so concurrent callers on the same key serialize in the
/// store and the last writer's values stick.
pub async fn upsert_item(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    order_id: i64,
    item: &OrderItemInput,
) -> Result<OrderItem, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(&format!(
        r#"
        INSERT INTO order_items (order_id, dish_id, quantity, price_at_moment, comment)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT (order_id, dish_id) DO UPDATE SET
            quantity = excluded.quantity,
            price_at_moment = excluded.price_at_moment,
            comment = excluded.comment
        RETURNING {ITEM_COLUMNS}
        "#
    ))
    .bind(order_id)
    .bind(item.dish_id)
    .bind(item.quantity)
    .bind(item.price_at_moment)
    .bind(&item.comment)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Newest first, optionally filtered by exact status
pub async fn find_all(
    pool: &SqlitePool,
    status: Option<&str>,
    limit: i64,
) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE (?1 IS NULL OR status = ?1) \
         ORDER BY created_at DESC, id DESC LIMIT ?2"
    ))
    .bind(status)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn find_items(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    order_id: i64,
) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = ? ORDER BY id"
    ))
    .bind(order_id)
    .fetch_all(conn)
    .await
}

/// Set the status, optionally only if it still equals `expected`.
///
/// `None` means no row matched: the order is gone or, with `expected`,
/// its status moved on in the meantime.
pub async fn update_status(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
    status: &str,
    expected: Option<&str>,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders SET status = ?1 WHERE id = ?2 AND (?3 IS NULL OR status = ?3) \
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(status)
    .bind(id)
    .bind(expected)
    .fetch_optional(conn)
    .await
}

/// Remove one line of one order
pub async fn delete_item(pool: &SqlitePool, order_id: i64, item_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM order_items WHERE id = ? AND order_id = ?")
        .bind(item_id)
        .bind(order_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Order item {item_id} not found in order {order_id}"
        )));
    }
    Ok(())
}
