//! API route configuration.

use crate::api::handlers::{check_links_handler, generate_report_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /check-links`     - Check a list of URLs and store the batch
/// - `POST /generate-report` - Render a PDF report over stored batches
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/check-links", post(check_links_handler))
        .route("/generate-report", post(generate_report_handler))
}
