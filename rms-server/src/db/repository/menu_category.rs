//! Menu Category Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuCategory, MenuCategoryUpdate, MenuCategoryUpsert};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuCategory>> {
    let categories = sqlx::query_as::<_, MenuCategory>(
        "SELECT id, name, description, sort_order, is_active FROM menu_categories ORDER BY sort_order, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuCategory>> {
    let category = sqlx::query_as::<_, MenuCategory>(
        "SELECT id, name, description, sort_order, is_active FROM menu_categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

/// Insert, or overwrite the category with the same name
pub async fn upsert(pool: &SqlitePool, data: MenuCategoryUpsert) -> RepoResult<MenuCategory> {
    let category = sqlx::query_as::<_, MenuCategory>(
        r#"
        INSERT INTO menu_categories (name, description, sort_order, is_active)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (name) DO UPDATE SET
            description = excluded.description, sort_order = excluded.sort_order,
            is_active = excluded.is_active
        RETURNING id, name, description, sort_order, is_active
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.sort_order)
    .bind(data.is_active)
    .fetch_one(pool)
    .await?;
    Ok(category)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: MenuCategoryUpdate,
) -> RepoResult<MenuCategory> {
    let rows = sqlx::query(
        "UPDATE menu_categories SET name = COALESCE(?1, name), description = COALESCE(?2, description), sort_order = COALESCE(?3, sort_order), is_active = COALESCE(?4, is_active) WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

/// Fails with a constraint error while dishes still reference the category
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM menu_categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    fn category(name: &str, sort_order: i32) -> MenuCategoryUpsert {
        MenuCategoryUpsert {
            name: name.into(),
            description: None,
            sort_order,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_upsert_and_ordering() {
        let (_dir, pool) = testing::pool().await;

        upsert(&pool, category("Desserts", 3)).await.unwrap();
        let starters = upsert(&pool, category("Starters", 1)).await.unwrap();
        let again = upsert(&pool, category("Starters", 5)).await.unwrap();
        assert_eq!(starters.id, again.id);

        let names: Vec<_> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Desserts", "Starters"]);
    }

    #[tokio::test]
    async fn test_delete_referenced_category_is_constraint() {
        let (_dir, pool) = testing::pool().await;
        testing::seed_floor(&pool).await;
        let mains = find_all(&pool).await.unwrap().remove(0);

        assert!(matches!(
            delete(&pool, mains.id).await,
            Err(RepoError::Constraint(_))
        ));
    }
}
