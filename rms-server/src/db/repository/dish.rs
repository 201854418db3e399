//! Dish Repository (dishes and their ingredients)

use super::{RepoError, RepoResult};
use shared::models::{Dish, DishIngredient, DishIngredientUpsert, DishUpdate, DishUpsert};
use sqlx::SqlitePool;

const SELECT_DISH: &str =
    "SELECT id, category_id, name, price, cook_time_minutes, is_active, description FROM dishes";

pub async fn find_all(
    pool: &SqlitePool,
    category_id: Option<i64>,
    limit: i64,
) -> RepoResult<Vec<Dish>> {
    let dishes = match category_id {
        Some(category_id) => {
            sqlx::query_as::<_, Dish>(&format!(
                "{SELECT_DISH} WHERE category_id = ? ORDER BY id LIMIT ?"
            ))
            .bind(category_id)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Dish>(&format!("{SELECT_DISH} ORDER BY id LIMIT ?"))
                .bind(limit)
                .fetch_all(pool)
                .await?
        }
    };
    Ok(dishes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Dish>> {
    let dish = sqlx::query_as::<_, Dish>(&format!("{SELECT_DISH} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(dish)
}

/// Insert, or overwrite the dish with the same `(category_id, name)`
pub async fn upsert(pool: &SqlitePool, data: DishUpsert) -> RepoResult<Dish> {
    let dish = sqlx::query_as::<_, Dish>(
        r#"
        INSERT INTO dishes (category_id, name, price, cook_time_minutes, is_active, description)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT (category_id, name) DO UPDATE SET
            price = excluded.price, cook_time_minutes = excluded.cook_time_minutes,
            is_active = excluded.is_active, description = excluded.description
        RETURNING id, category_id, name, price, cook_time_minutes, is_active, description
        "#,
    )
    .bind(data.category_id)
    .bind(&data.name)
    .bind(data.price)
    .bind(data.cook_time_minutes)
    .bind(data.is_active)
    .bind(&data.description)
    .fetch_one(pool)
    .await?;
    Ok(dish)
}

pub async fn update(pool: &SqlitePool, id: i64, data: DishUpdate) -> RepoResult<Dish> {
    let rows = sqlx::query(
        "UPDATE dishes SET category_id = COALESCE(?1, category_id), name = COALESCE(?2, name), price = COALESCE(?3, price), cook_time_minutes = COALESCE(?4, cook_time_minutes), is_active = COALESCE(?5, is_active), description = COALESCE(?6, description) WHERE id = ?7",
    )
    .bind(data.category_id)
    .bind(&data.name)
    .bind(data.price)
    .bind(data.cook_time_minutes)
    .bind(data.is_active)
    .bind(&data.description)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dish {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dish {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM dishes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dish {id} not found")));
    }
    Ok(())
}

// ── Ingredients ──

pub async fn find_ingredients(pool: &SqlitePool, dish_id: i64) -> RepoResult<Vec<DishIngredient>> {
    let ingredients = sqlx::query_as::<_, DishIngredient>(
        "SELECT id, dish_id, product_id, quantity FROM dish_ingredients WHERE dish_id = ? ORDER BY id",
    )
    .bind(dish_id)
    .fetch_all(pool)
    .await?;
    Ok(ingredients)
}

pub async fn upsert_ingredient(
    pool: &SqlitePool,
    dish_id: i64,
    data: DishIngredientUpsert,
) -> RepoResult<DishIngredient> {
    let ingredient = sqlx::query_as::<_, DishIngredient>(
        r#"
        INSERT INTO dish_ingredients (dish_id, product_id, quantity)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (dish_id, product_id) DO UPDATE SET quantity = excluded.quantity
        RETURNING id, dish_id, product_id, quantity
        "#,
    )
    .bind(dish_id)
    .bind(data.product_id)
    .bind(data.quantity)
    .fetch_one(pool)
    .await?;
    Ok(ingredient)
}

pub async fn delete_ingredient(pool: &SqlitePool, dish_id: i64, product_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM dish_ingredients WHERE dish_id = ? AND product_id = ?")
        .bind(dish_id)
        .bind(product_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Ingredient {product_id} of dish {dish_id} not found"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    #[tokio::test]
    async fn test_upsert_by_category_and_name() {
        let (_dir, pool) = testing::pool().await;
        let (_, _, soup_id) = testing::seed_floor(&pool).await;
        let soup = find_by_id(&pool, soup_id).await.unwrap().unwrap();

        let repriced = upsert(
            &pool,
            DishUpsert {
                category_id: soup.category_id,
                name: "Soup".into(),
                price: 11.5,
                cook_time_minutes: 12,
                is_active: true,
                description: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(repriced.id, soup_id);
        assert_eq!(repriced.price, 11.5);

        assert_eq!(find_all(&pool, Some(soup.category_id), 200).await.unwrap().len(), 1);
        assert!(find_all(&pool, Some(999), 200).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ingredients() {
        let (_dir, pool) = testing::pool().await;
        let (_, _, dish_id) = testing::seed_floor(&pool).await;
        let product_id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, unit) VALUES ('Leek', 'pcs') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        upsert_ingredient(&pool, dish_id, DishIngredientUpsert { product_id, quantity: 1.0 })
            .await
            .unwrap();
        let updated = upsert_ingredient(
            &pool,
            dish_id,
            DishIngredientUpsert { product_id, quantity: 2.0 },
        )
        .await
        .unwrap();
        assert_eq!(updated.quantity, 2.0);
        assert_eq!(find_ingredients(&pool, dish_id).await.unwrap().len(), 1);

        delete_ingredient(&pool, dish_id, product_id).await.unwrap();
        assert!(matches!(
            delete_ingredient(&pool, dish_id, product_id).await,
            Err(RepoError::NotFound(_))
        ));
    }
}
