//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "batch_store": {
///       "status": "ok",
///       "message": "Batches stored: 3"
///     }
///   }
/// }
/// ```
///
/// The in-memory batch store cannot degrade, so this endpoint always
/// returns 200.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stored = state.batch_repository.count().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            batch_store: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("Batches stored: {}", stored)),
            },
        },
    })
}
