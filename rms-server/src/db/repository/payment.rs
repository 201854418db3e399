//! Payment Repository
//!
//! One payment per order; recording a payment again overwrites it.

use super::{RepoError, RepoResult};
use shared::models::{DEFAULT_PAYMENT_STATUS, Payment, PaymentUpsert};
use sqlx::SqlitePool;

pub async fn find_by_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Option<Payment>> {
    let payment = sqlx::query_as::<_, Payment>(
        "SELECT id, order_id, amount, method, paid_at, status FROM payments WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    Ok(payment)
}

pub async fn upsert(pool: &SqlitePool, data: PaymentUpsert) -> RepoResult<Payment> {
    let paid_at = data.paid_at.unwrap_or_else(shared::util::now_millis);
    let status = data
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_PAYMENT_STATUS);

    let payment = sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (order_id, amount, method, paid_at, status)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT (order_id) DO UPDATE SET
            amount = excluded.amount, method = excluded.method,
            paid_at = excluded.paid_at, status = excluded.status
        RETURNING id, order_id, amount, method, paid_at, status
        "#,
    )
    .bind(data.order_id)
    .bind(data.amount)
    .bind(&data.method)
    .bind(paid_at)
    .bind(status)
    .fetch_one(pool)
    .await?;
    Ok(payment)
}

pub async fn delete_by_order(pool: &SqlitePool, order_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM payments WHERE order_id = ?")
        .bind(order_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Payment for order {order_id} not found"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    #[tokio::test]
    async fn test_upsert_by_order() {
        let (_dir, pool) = testing::pool().await;
        let (table_id, waiter_id, _) = testing::seed_floor(&pool).await;
        let order_id: i64 = sqlx::query_scalar(
            "INSERT INTO orders (table_id, waiter_id) VALUES (?, ?) RETURNING id",
        )
        .bind(table_id)
        .bind(waiter_id)
        .fetch_one(&pool)
        .await
        .unwrap();

        let first = upsert(
            &pool,
            PaymentUpsert {
                order_id,
                amount: 20.0,
                method: "cash".into(),
                paid_at: None,
                status: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(first.status, "paid");
        assert!(first.paid_at > 0);

        let second = upsert(
            &pool,
            PaymentUpsert {
                order_id,
                amount: 25.0,
                method: "card".into(),
                paid_at: Some(1_700_000_000_000),
                status: Some("refunded".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.amount, 25.0);
        assert_eq!(second.paid_at, 1_700_000_000_000);

        delete_by_order(&pool, order_id).await.unwrap();
        assert!(find_by_order(&pool, order_id).await.unwrap().is_none());
        assert!(matches!(
            delete_by_order(&pool, order_id).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_payment_for_missing_order_is_constraint() {
        let (_dir, pool) = testing::pool().await;
        let result = upsert(
            &pool,
            PaymentUpsert {
                order_id: 404,
                amount: 1.0,
                method: "cash".into(),
                paid_at: None,
                status: None,
            },
        )
        .await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }
}
