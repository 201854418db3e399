//! Database Module
//!
//! Owns the SQLite connection pool, the startup connectivity check and
//! migrations. All other modules reach the store through [`DbService::pool`].

pub mod repository;

use shared::error::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::time::Duration;

use crate::config::DbConfig;

/// Deadline for the connectivity check at startup
const CONNECT_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Writers wait this long on a locked database file instead of failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database service - owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database, verify connectivity and apply migrations
    pub async fn new(config: &DbConfig) -> Result<Self, AppError> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        // WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .max_lifetime(config.max_lifetime)
            .idle_timeout(config.idle_timeout)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::check_connectivity(&pool).await?;

        tracing::info!(
            path = %config.path.display(),
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connection established (SQLite WAL)"
        );

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// `SELECT 1` bounded by a fixed deadline
    async fn check_connectivity(pool: &SqlitePool) -> Result<(), AppError> {
        match tokio::time::timeout(CONNECT_CHECK_TIMEOUT, sqlx::query("SELECT 1").execute(pool))
            .await
        {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(AppError::database(format!(
                "Database connectivity check failed: {e}"
            ))),
            Err(_) => Err(AppError::database(format!(
                "Database connectivity check timed out after {}s",
                CONNECT_CHECK_TIMEOUT.as_secs()
            ))),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
