//! DTOs for the generate-report endpoint.

use serde::Deserialize;

/// Request for a PDF report over the given batch IDs.
///
/// Unknown IDs are silently excluded from the report; an empty list is
/// valid and produces a title-only document.
#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub links_list: Vec<i64>,
}
