//! Import Error Repository
//!
//! Append-only log of rejected import records. The pipeline only writes;
//! reading is for operators.

use super::RepoResult;
use shared::models::ImportError;
use sqlx::SqlitePool;

/// Append one error row; runs on the caller's transaction
pub async fn insert(
    conn: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    entity: &str,
    raw_data: &str,
    error_message: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO import_errors (entity, raw_data, error_message) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(entity)
    .bind(raw_data)
    .bind(error_message)
    .fetch_one(conn)
    .await
}

/// Newest first
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<ImportError>> {
    let errors = sqlx::query_as::<_, ImportError>(
        "SELECT id, created_at, entity, raw_data, error_message FROM import_errors ORDER BY id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(errors)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar("SELECT COUNT(*) FROM import_errors")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
