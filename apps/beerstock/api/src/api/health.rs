//! Readiness check backed by the configured database.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

/// Reports `ready` once every backing service answers.
///
/// With the in-memory repository there is nothing to check.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        let ping: HealthCheckFuture<'_> = Box::pin(async move {
            check_health(db)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        });
        checks.push(("database", ping));
    }

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
