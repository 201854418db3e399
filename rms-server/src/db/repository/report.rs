//! Report Repository (read-only views)

use super::RepoResult;
use shared::models::{DishAvailability, ShiftRevenue, WaiterPerformance};
use sqlx::SqlitePool;

pub async fn shift_revenue(pool: &SqlitePool) -> RepoResult<Vec<ShiftRevenue>> {
    let rows = sqlx::query_as::<_, ShiftRevenue>(
        "SELECT shift_id, opened_at, closed_at, orders_count, total_revenue, avg_check FROM view_shift_revenue ORDER BY shift_id DESC LIMIT 100",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn waiter_performance(pool: &SqlitePool) -> RepoResult<Vec<WaiterPerformance>> {
    let rows = sqlx::query_as::<_, WaiterPerformance>(
        "SELECT waiter_id, full_name, orders_count, total_revenue, avg_check FROM view_waiter_performance ORDER BY total_revenue DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn dishes_availability(pool: &SqlitePool) -> RepoResult<Vec<DishAvailability>> {
    let rows = sqlx::query_as::<_, DishAvailability>(
        "SELECT id, name, price, is_active, all_products_available, can_be_ordered FROM view_dishes_availability ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    #[tokio::test]
    async fn test_reports_aggregate_paid_orders() {
        let (_dir, pool) = testing::pool().await;
        let (table_id, waiter_id, dish_id) = testing::seed_floor(&pool).await;

        let shift_id: i64 = sqlx::query_scalar(
            "INSERT INTO shifts (opened_by) VALUES (?) RETURNING id",
        )
        .bind(waiter_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        for amount in [10.0_f64, 30.0] {
            let order_id: i64 = sqlx::query_scalar(
                "INSERT INTO orders (table_id, waiter_id, shift_id) VALUES (?, ?, ?) RETURNING id",
            )
            .bind(table_id)
            .bind(waiter_id)
            .bind(shift_id)
            .fetch_one(&pool)
            .await
            .unwrap();
            sqlx::query(
                "INSERT INTO payments (order_id, amount, method, paid_at) VALUES (?, ?, 'cash', 0)",
            )
            .bind(order_id)
            .bind(amount)
            .execute(&pool)
            .await
            .unwrap();
        }

        let revenue = shift_revenue(&pool).await.unwrap();
        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue[0].shift_id, shift_id);
        assert_eq!(revenue[0].orders_count, 2);
        assert_eq!(revenue[0].total_revenue, 40.0);
        assert_eq!(revenue[0].avg_check, Some(20.0));

        let waiters = waiter_performance(&pool).await.unwrap();
        assert_eq!(waiters.len(), 1);
        assert_eq!(waiters[0].full_name, "Ana");
        assert_eq!(waiters[0].total_revenue, 40.0);

        let dishes = dishes_availability(&pool).await.unwrap();
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].id, dish_id);
        assert!(dishes[0].can_be_ordered);
    }

    #[tokio::test]
    async fn test_unavailable_ingredient_blocks_dish() {
        let (_dir, pool) = testing::pool().await;
        let (_, _, dish_id) = testing::seed_floor(&pool).await;
        let product_id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, unit, is_available) VALUES ('Saffron', 'g', 0) RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO dish_ingredients (dish_id, product_id, quantity) VALUES (?, ?, 1)")
            .bind(dish_id)
            .bind(product_id)
            .execute(&pool)
            .await
            .unwrap();

        let dishes = dishes_availability(&pool).await.unwrap();
        assert!(dishes[0].is_active);
        assert!(!dishes[0].all_products_available);
        assert!(!dishes[0].can_be_ordered);
    }

    #[tokio::test]
    async fn test_empty_shift_has_no_average() {
        let (_dir, pool) = testing::pool().await;
        let (_, waiter_id, _) = testing::seed_floor(&pool).await;
        sqlx::query("INSERT INTO shifts (opened_by) VALUES (?)")
            .bind(waiter_id)
            .execute(&pool)
            .await
            .unwrap();

        let revenue = shift_revenue(&pool).await.unwrap();
        assert_eq!(revenue[0].orders_count, 0);
        assert_eq!(revenue[0].total_revenue, 0.0);
        assert!(revenue[0].avg_check.is_none());
    }
}
