//! Handler for the check-links endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::check_links::{CheckLinksRequest, CheckLinksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Checks a list of URLs and stores the outcomes as a new batch.
///
/// # Endpoint
///
/// `POST /api/check-links`
///
/// # Request Body
///
/// ```json
/// { "links": ["google.com", "https://example.com"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "links": {
///     "google.com": "available",
///     "https://example.com": "not available"
///   },
///   "links_num": 1
/// }
/// ```
///
/// `links_num` is the ID of the stored batch; pass it to the
/// generate-report endpoint to include this batch in a report.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON or when the request exceeds
/// the per-request URL limit. Unreachable URLs are not errors; they appear
/// as `"not available"` in the response.
pub async fn check_links_handler(
    State(state): State<AppState>,
    Json(payload): Json<CheckLinksRequest>,
) -> Result<Json<CheckLinksResponse>, AppError> {
    payload.validate()?;

    tracing::info!(count = payload.links.len(), "checking links");
    let batch = state.link_service.check_links(payload.links).await?;

    let links = batch
        .links
        .iter()
        .map(|link| (link.url.clone(), link.status))
        .collect();

    Ok(Json(CheckLinksResponse {
        links,
        links_num: batch.id,
    }))
}
