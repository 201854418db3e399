//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

const SELECT_EMPLOYEE: &str =
    "SELECT id, full_name, phone, email, role_id, hired_at, is_active FROM employees";

pub async fn find_all(pool: &SqlitePool, active_only: bool) -> RepoResult<Vec<Employee>> {
    let sql = if active_only {
        format!("{SELECT_EMPLOYEE} WHERE is_active = 1 ORDER BY id")
    } else {
        format!("{SELECT_EMPLOYEE} ORDER BY id")
    };
    let employees = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let hired_at = data.hired_at.unwrap_or_else(shared::util::now_millis);
    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (full_name, phone, email, role_id, hired_at, is_active) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id, full_name, phone, email, role_id, hired_at, is_active",
    )
    .bind(&data.full_name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.role_id)
    .bind(hired_at)
    .bind(data.is_active.unwrap_or(true))
    .fetch_one(pool)
    .await?;
    Ok(employee)
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE employees SET full_name = COALESCE(?1, full_name), phone = COALESCE(?2, phone), email = COALESCE(?3, email), role_id = COALESCE(?4, role_id), is_active = COALESCE(?5, is_active) WHERE id = ?6",
    )
    .bind(&data.full_name)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.role_id)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    fn waiter(name: &str) -> EmployeeCreate {
        EmployeeCreate {
            full_name: name.into(),
            phone: "600100200".into(),
            email: None,
            role_id: 3,
            hired_at: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_employee_crud() {
        let (_dir, pool) = testing::pool().await;

        let ana = create(&pool, waiter("Ana")).await.unwrap();
        assert!(ana.is_active);
        assert!(ana.hired_at > 0);

        let ana = update(
            &pool,
            ana.id,
            EmployeeUpdate {
                is_active: Some(false),
                email: Some("ana@example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(!ana.is_active);
        assert_eq!(ana.full_name, "Ana");
        assert_eq!(ana.email.as_deref(), Some("ana@example.com"));

        create(&pool, waiter("Luis")).await.unwrap();
        assert_eq!(find_all(&pool, false).await.unwrap().len(), 2);
        assert_eq!(find_all(&pool, true).await.unwrap().len(), 1);

        delete(&pool, ana.id).await.unwrap();
        assert!(matches!(
            delete(&pool, ana.id).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_role_is_constraint() {
        let (_dir, pool) = testing::pool().await;
        let mut data = waiter("Ghost");
        data.role_id = 999;
        assert!(matches!(
            create(&pool, data).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (_dir, pool) = testing::pool().await;
        let result = update(&pool, 42, EmployeeUpdate::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound(msg)) if msg == "Employee 42 not found"));
    }
}
