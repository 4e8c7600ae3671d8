//! Database connectivity shared by the services in this workspace.
//!
//! # Features
//!
//! - `postgres` (default): SeaORM connection pool, migrations and health checks
//! - `config`: load [`postgres::PostgresConfig`] from the environment via
//!   `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{PostgresConfig, connect_from_config_with_retry, run_migrations};
//!
//! let db = connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! run_migrations::<migration::Migrator>(&db, "beerstock").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};
