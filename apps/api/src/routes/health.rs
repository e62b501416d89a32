//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its dependencies:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (verifies the database)
//! - `GET /health/live` - Kubernetes-style liveness probe

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use bson::doc;
use mongodb::Database;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Database handle for readiness checks; absent in minimal test setups
    pub database: Option<Database>,
}

impl HealthState {
    /// Create new health state from config, without a database
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            database: None,
        }
    }

    /// Attach the database handle used by the readiness probe
    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
///
/// This is useful for load balancer health checks that just need to verify
/// the server is responding to HTTP requests.
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
/// This should NOT check external dependencies - that's what readiness is for.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe verifying the database connection
///
/// Returns 200 when a ping against the configured database succeeds,
/// 503 otherwise.
async fn readiness_probe(State(state): State<HealthState>) -> impl IntoResponse {
    let database_status = match &state.database {
        Some(database) => match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => "ok".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Readiness database ping failed");
                format!("error: {e}")
            }
        },
        None => "not configured".to_string(),
    };

    let ready = database_status == "ok";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if ready { "ready" } else { "not_ready" },
            "environment": state.config.common.environment.to_string(),
            "checks": {
                "database": database_status,
            },
        })),
    )
}
