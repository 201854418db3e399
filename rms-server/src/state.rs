//! Shared server state
//!
//! Cheap to clone: the pool and the manager are handles. There is no other
//! in-process mutable state; the database is the only shared resource.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::DbService;
use crate::orders::OrdersManager;

#[derive(Clone)]
pub struct ServerState {
    pub db: DbService,
    pub orders: OrdersManager,
    pub config: Arc<Config>,
}

impl ServerState {
    pub fn new(db: DbService, config: Config) -> Self {
        let orders = OrdersManager::new(db.pool.clone(), config.order_status_policy);
        Self {
            db,
            orders,
            config: Arc::new(config),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
