//! Shift Repository

use super::{RepoError, RepoResult};
use shared::models::{SHIFT_CLOSED, SHIFT_OPEN, Shift, ShiftClose, ShiftOpen};
use sqlx::SqlitePool;

const SELECT_SHIFT: &str = "SELECT id, opened_by, closed_by, opened_at, closed_at, status, note, expected_revenue, actual_revenue FROM shifts";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Shift>> {
    let shift = sqlx::query_as::<_, Shift>(&format!("{SELECT_SHIFT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(shift)
}

/// Newest first
pub async fn find_all(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, Shift>(&format!(
        "{SELECT_SHIFT} ORDER BY opened_at DESC, id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(shifts)
}

pub async fn open(pool: &SqlitePool, data: ShiftOpen) -> RepoResult<Shift> {
    if data.expected_revenue < 0.0 {
        return Err(RepoError::Validation(format!(
            "Expected revenue cannot be negative: {}",
            data.expected_revenue
        )));
    }
    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO shifts (opened_by, opened_at, status, note, expected_revenue) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
    )
    .bind(data.opened_by)
    .bind(now)
    .bind(SHIFT_OPEN)
    .bind(&data.note)
    .bind(data.expected_revenue)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create shift".into()))
}

pub async fn close(pool: &SqlitePool, id: i64, data: ShiftClose) -> RepoResult<Shift> {
    if data.actual_revenue < 0.0 {
        return Err(RepoError::Validation(format!(
            "Actual revenue cannot be negative: {}",
            data.actual_revenue
        )));
    }
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE shifts SET status = ?1, closed_by = ?2, closed_at = ?3, actual_revenue = ?4, note = COALESCE(?5, note) WHERE id = ?6 AND status = ?7",
    )
    .bind(SHIFT_CLOSED)
    .bind(data.closed_by)
    .bind(now)
    .bind(data.actual_revenue)
    .bind(&data.note)
    .bind(id)
    .bind(SHIFT_OPEN)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Shift {id} not found or already closed"
        )));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Shift {id} not found")))
}
