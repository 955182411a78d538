//! Handler for the generate-report endpoint.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::generate_report::GenerateReportRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a PDF report summarizing the requested batches.
///
/// # Endpoint
///
/// `POST /api/generate-report`
///
/// # Request Body
///
/// ```json
/// { "links_list": [1, 2] }
/// ```
///
/// # Response
///
/// The PDF bytes with `Content-Type: application/pdf`, served as an
/// attachment named `links_report.pdf`.
///
/// Unknown batch IDs are silently excluded; an empty or fully unknown ID
/// list still returns a valid title-only document with status 200.
pub async fn generate_report_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateReportRequest>,
) -> Result<Response, AppError> {
    tracing::info!(batches = ?payload.links_list, "generating report");
    let pdf = state.link_service.generate_report(payload.links_list).await?;

    tracing::info!(size = pdf.len(), "generated PDF report");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"links_report.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}
