//! Server configuration
//!
//! Loaded from environment variables (a `.env` file is read first by `main`).

use std::path::PathBuf;
use std::time::Duration;

use crate::orders::StatusPolicy;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite database file
    pub path: PathBuf,
    /// Ceiling on simultaneously open connections
    pub max_connections: u32,
    /// Connections kept warm while idle
    pub min_connections: u32,
    /// Connections are retired after this lifetime
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    /// How long a caller waits on a saturated pool
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/rms.db"),
            max_connections: 20,
            min_connections: 5,
            max_lifetime: Duration::from_secs(30 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub db: DbConfig,
    /// Per-request deadline; expiry cancels in-flight store work
    pub request_timeout: Duration,
    /// Upper bound on candidate records per import call
    pub import_max_records: usize,
    pub order_status_policy: StatusPolicy,
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
    pub log_json: bool,
    /// Daily rolling log files are written here when set
    pub log_dir: Option<PathBuf>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            db: DbConfig::default(),
            request_timeout: Duration::from_secs(30),
            import_max_records: 5000,
            order_status_policy: StatusPolicy::Permissive,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn env_secs(name: &str, default: Duration) -> Duration {
    env_parse::<u64>(name)
        .map(Duration::from_secs)
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let defaults = Config::default();
        let db_defaults = defaults.db;

        let order_status_policy = match std::env::var("ORDER_STATUS_POLICY") {
            Ok(v) if !v.trim().is_empty() => v
                .parse()
                .map_err(|e| format!("ORDER_STATUS_POLICY: {e}"))?,
            _ => defaults.order_status_policy,
        };

        let db = DbConfig {
            path: std::env::var("DATABASE_PATH")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(db_defaults.path),
            max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(db_defaults.max_connections),
            min_connections: env_parse("DB_MIN_CONNECTIONS").unwrap_or(db_defaults.min_connections),
            max_lifetime: env_secs("DB_MAX_LIFETIME_SECS", db_defaults.max_lifetime),
            idle_timeout: env_secs("DB_IDLE_TIMEOUT_SECS", db_defaults.idle_timeout),
            acquire_timeout: env_secs("DB_ACQUIRE_TIMEOUT_SECS", db_defaults.acquire_timeout),
        };
        if db.min_connections > db.max_connections {
            return Err(format!(
                "DB_MIN_CONNECTIONS ({}) exceeds DB_MAX_CONNECTIONS ({})",
                db.min_connections, db.max_connections
            )
            .into());
        }

        Ok(Self {
            http_port: env_parse("HTTP_PORT").unwrap_or(defaults.http_port),
            db,
            request_timeout: env_secs("REQUEST_TIMEOUT_SECS", defaults.request_timeout),
            import_max_records: env_parse("IMPORT_MAX_RECORDS")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.import_max_records),
            order_status_policy,
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: env_parse("LOG_JSON").unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }
}
