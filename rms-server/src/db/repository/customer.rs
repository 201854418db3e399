//! Customer Repository

use super::{RepoError, RepoResult};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use sqlx::SqlitePool;

const SELECT_CUSTOMER: &str =
    "SELECT id, full_name, phone, email, vip_level, created_at FROM customers";

/// Newest first
pub async fn find_all(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>(&format!(
        "{SELECT_CUSTOMER} ORDER BY created_at DESC, id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(customers)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let customer = sqlx::query_as::<_, Customer>(&format!("{SELECT_CUSTOMER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(customer)
}

pub async fn create(pool: &SqlitePool, data: CustomerCreate) -> RepoResult<Customer> {
    let customer = sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (full_name, phone, email, vip_level) VALUES (?1, ?2, ?3, ?4) RETURNING id, full_name, phone, email, vip_level, created_at",
    )
    .bind(&data.full_name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.vip_level.unwrap_or(0))
    .fetch_one(pool)
    .await?;
    Ok(customer)
}

pub async fn update(pool: &SqlitePool, id: i64, data: CustomerUpdate) -> RepoResult<Customer> {
    let rows = sqlx::query(
        "UPDATE customers SET full_name = COALESCE(?1, full_name), phone = COALESCE(?2, phone), email = COALESCE(?3, email), vip_level = COALESCE(?4, vip_level) WHERE id = ?5",
    )
    .bind(&data.full_name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.vip_level)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM customers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    Ok(())
}
