//! Product Repository
//!
//! Products are keyed by `name`; [`upsert`] is shared with the batch import
//! pipeline, which runs it inside its own transaction.

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductDraft, ProductStock, ProductUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, unit, cost_price, is_available FROM products ORDER BY id LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, unit, cost_price, is_available FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Insert, or overwrite unit/cost/availability of the product with the same name.
///
/// Returns the product id. Errors are raw `sqlx` errors so the import
/// pipeline can tell constraint rejections from infrastructure failures.
pub async fn upsert(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    draft: &ProductDraft,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO products (name, unit, cost_price, is_available)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (name) DO UPDATE SET
            unit = excluded.unit, cost_price = excluded.cost_price,
            is_available = excluded.is_available
        RETURNING id
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.unit)
    .bind(draft.cost_price)
    .bind(draft.is_available)
    .fetch_one(conn)
    .await
}

pub async fn upsert_one(pool: &SqlitePool, draft: &ProductDraft) -> RepoResult<Product> {
    let id = upsert(pool, draft).await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Product {id} vanished after upsert")))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    let rows = sqlx::query(
        "UPDATE products SET name = COALESCE(?1, name), unit = COALESCE(?2, unit), cost_price = COALESCE(?3, cost_price), is_available = COALESCE(?4, is_available) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.unit)
    .bind(data.cost_price)
    .bind(data.is_available)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    Ok(())
}

// ── Stock ──

pub async fn find_stock(pool: &SqlitePool, product_id: i64) -> RepoResult<Option<ProductStock>> {
    let stock = sqlx::query_as::<_, ProductStock>(
        "SELECT product_id, quantity, updated_at FROM product_stock WHERE product_id = ?",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;
    Ok(stock)
}

pub async fn set_stock(pool: &SqlitePool, product_id: i64, quantity: f64) -> RepoResult<ProductStock> {
    let now = shared::util::now_millis();
    let stock = sqlx::query_as::<_, ProductStock>(
        r#"
        INSERT INTO product_stock (product_id, quantity, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (product_id) DO UPDATE SET
            quantity = excluded.quantity, updated_at = excluded.updated_at
        RETURNING product_id, quantity, updated_at
        "#,
    )
    .bind(product_id)
    .bind(quantity)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Constraint(_) => RepoError::NotFound(format!("Product {product_id} not found")),
        other => other,
    })?;
    Ok(stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    fn draft(name: &str, unit: &str, cost: Option<f64>, available: bool) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            unit: unit.into(),
            cost_price: cost,
            is_available: available,
        }
    }

    #[tokio::test]
    async fn test_upsert_updates_in_place() {
        let (_dir, pool) = testing::pool().await;

        let a = upsert_one(&pool, &draft("Flour", "kg", Some(0.8), true))
            .await
            .unwrap();
        let b = upsert_one(&pool, &draft("Flour", "bag", None, false))
            .await
            .unwrap();

        assert_eq!(a.id, b.id);
        assert_eq!(b.unit, "bag");
        assert_eq!(b.cost_price, None);
        assert!(!b.is_available);
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stock() {
        let (_dir, pool) = testing::pool().await;
        let p = upsert_one(&pool, &draft("Milk", "l", None, true)).await.unwrap();

        assert!(find_stock(&pool, p.id).await.unwrap().is_none());
        set_stock(&pool, p.id, 3.0).await.unwrap();
        let stock = set_stock(&pool, p.id, 12.5).await.unwrap();
        assert_eq!(stock.quantity, 12.5);
        assert_eq!(find_stock(&pool, p.id).await.unwrap().unwrap().quantity, 12.5);

        assert!(matches!(
            set_stock(&pool, 999, 1.0).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_limit_and_delete() {
        let (_dir, pool) = testing::pool().await;
        for name in ["A", "B", "C"] {
            upsert_one(&pool, &draft(name, "pcs", None, true)).await.unwrap();
        }
        assert_eq!(find_all(&pool, 2).await.unwrap().len(), 2);

        let first = find_all(&pool, 1).await.unwrap().remove(0);
        delete(&pool, first.id).await.unwrap();
        assert!(matches!(delete(&pool, first.id).await, Err(RepoError::NotFound(_))));
    }
}
