//! Reservation Repository
//!
//! Reservation status is a free-form string; any value may follow any other.

use super::{RepoError, RepoResult};
use shared::models::{DEFAULT_RESERVATION_STATUS, Reservation, ReservationCreate};
use sqlx::SqlitePool;

const SELECT_RESERVATION: &str =
    "SELECT id, customer_id, table_id, reserved_from, reserved_to, status, created_at FROM reservations";

pub async fn find_all(pool: &SqlitePool, status: Option<&str>) -> RepoResult<Vec<Reservation>> {
    let reservations = match status {
        Some(status) => {
            sqlx::query_as::<_, Reservation>(&format!(
                "{SELECT_RESERVATION} WHERE status = ? ORDER BY reserved_from"
            ))
            .bind(status)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Reservation>(&format!(
                "{SELECT_RESERVATION} ORDER BY reserved_from"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(reservations)
}

pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<Reservation> {
    let status = data
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_RESERVATION_STATUS);

    let reservation = sqlx::query_as::<_, Reservation>(
        "INSERT INTO reservations (customer_id, table_id, reserved_from, reserved_to, status) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, customer_id, table_id, reserved_from, reserved_to, status, created_at",
    )
    .bind(data.customer_id)
    .bind(data.table_id)
    .bind(data.reserved_from)
    .bind(data.reserved_to)
    .bind(status)
    .fetch_one(pool)
    .await?;
    Ok(reservation)
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: &str) -> RepoResult<Reservation> {
    let reservation = sqlx::query_as::<_, Reservation>(
        "UPDATE reservations SET status = ?1 WHERE id = ?2 RETURNING id, customer_id, table_id, reserved_from, reserved_to, status, created_at",
    )
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    reservation.ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM reservations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    Ok(())
}
