//! Shared application state passed to the routers.

use database::postgres::DatabaseConnection;

/// Cloned into each router (cheap, the connection pool is shared)
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool, absent when running in memory
    pub db: Option<DatabaseConnection>,
}
