//! Role Repository

use super::{RepoError, RepoResult};
use shared::models::{Role, RoleCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Role>> {
    let roles = sqlx::query_as::<_, Role>(
        "SELECT id, name, description, is_system, created_at FROM roles ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(roles)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>(
        "SELECT id, name, description, is_system, created_at FROM roles WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(role)
}

pub async fn create(pool: &SqlitePool, data: RoleCreate) -> RepoResult<Role> {
    let role = sqlx::query_as::<_, Role>(
        "INSERT INTO roles (name, description, is_system) VALUES (?1, ?2, 0) RETURNING id, name, description, is_system, created_at",
    )
    .bind(&data.name)
    .bind(&data.description)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Role '{}' already exists", data.name))
        }
        other => other,
    })?;
    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing;

    #[tokio::test]
    async fn test_seeded_roles_and_create() {
        let (_dir, pool) = testing::pool().await;

        let roles = find_all(&pool).await.unwrap();
        let names: Vec<_> = roles.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["admin", "manager", "waiter", "cook"]);
        assert!(roles.iter().all(|r| r.is_system));

        let host = create(
            &pool,
            RoleCreate {
                name: "host".into(),
                description: Some("Front door".into()),
            },
        )
        .await
        .unwrap();
        assert!(!host.is_system);
        assert!(host.created_at > 0);
        assert_eq!(find_by_id(&pool, host.id).await.unwrap().unwrap().name, "host");

        let dup = create(
            &pool,
            RoleCreate {
                name: "host".into(),
                description: None,
            },
        )
        .await;
        assert!(matches!(dup, Err(RepoError::Duplicate(msg)) if msg.contains("host")));
    }
}
