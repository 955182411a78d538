//! DTOs for the check-links endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::LinkStatus;

/// Request to check the reachability of a list of URLs.
///
/// URLs are probed exactly as submitted; an empty list is valid and yields
/// a batch with zero links.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckLinksRequest {
    #[validate(length(max = 1000, message = "Too many links in one request"))]
    pub links: Vec<String>,
}

/// Response mapping each submitted URL to its availability verdict.
///
/// `links_num` carries the ID of the created batch, used to request a
/// report later. Duplicate URLs collapse into a single map entry.
#[derive(Debug, Serialize)]
pub struct CheckLinksResponse {
    pub links: HashMap<String, LinkStatus>,
    pub links_num: i64,
}
