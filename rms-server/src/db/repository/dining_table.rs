//! Dining Table Repository

use super::{RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableUpdate, DiningTableUpsert};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, table_number, seats, is_active, description FROM restaurant_tables ORDER BY table_number",
    )
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, table_number, seats, is_active, description FROM restaurant_tables WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// Insert, or overwrite seats/is_active/description of the table with the same number
pub async fn upsert(pool: &SqlitePool, data: DiningTableUpsert) -> RepoResult<DiningTable> {
    let table = sqlx::query_as::<_, DiningTable>(
        r#"
        INSERT INTO restaurant_tables (table_number, seats, is_active, description)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (table_number) DO UPDATE SET
            seats = excluded.seats, is_active = excluded.is_active,
            description = excluded.description
        RETURNING id, table_number, seats, is_active, description
        "#,
    )
    .bind(data.table_number)
    .bind(data.seats)
    .bind(data.is_active)
    .bind(&data.description)
    .fetch_one(pool)
    .await?;
    Ok(table)
}

pub async fn update(pool: &SqlitePool, id: i64, data: DiningTableUpdate) -> RepoResult<DiningTable> {
    let rows = sqlx::query(
        "UPDATE restaurant_tables SET table_number = COALESCE(?1, table_number), seats = COALESCE(?2, seats), is_active = COALESCE(?3, is_active), description = COALESCE(?4, description) WHERE id = ?5",
    )
    .bind(data.table_number)
    .bind(data.seats)
    .bind(data.is_active)
    .bind(&data.description)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Table {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM restaurant_tables WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {id} not found")));
    }
    Ok(())
}
