/// Shared application state
use crate::services::{AuthService, CatalogService};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth_service: Arc<AuthService>) -> Self {
        let catalog = Arc::new(CatalogService::new(pool.clone()));
        Self {
            pool,
            auth_service,
            catalog,
        }
    }
}
