//! Link check entities: per-URL outcomes and the batches that group them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Two-valued outcome of a reachability probe.
///
/// Serializes to the wire strings `"available"` / `"not available"` used by
/// the check-links response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "not available")]
    NotAvailable,
}

impl LinkStatus {
    /// Returns true if the probed URL was reachable.
    pub fn is_available(&self) -> bool {
        matches!(self, LinkStatus::Available)
    }

    /// Human-readable label used in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Available => "Available",
            LinkStatus::NotAvailable => "Not Available",
        }
    }
}

/// Outcome of checking a single URL.
///
/// `url` is stored exactly as submitted, never normalized. Immutable after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkCheck {
    pub url: String,
    pub status: LinkStatus,
    pub checked_at: DateTime<Utc>,
}

impl LinkCheck {
    pub fn new(url: String, status: LinkStatus, checked_at: DateTime<Utc>) -> Self {
        Self {
            url,
            status,
            checked_at,
        }
    }
}

/// Result set of one check-links request.
///
/// `id` is assigned once by the batch store and never reused. `links` keeps
/// the order and length of the submitted URL list, including zero entries.
/// A batch is never mutated after it has been saved.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkBatch {
    pub id: i64,
    pub links: Vec<LinkCheck>,
    pub created_at: DateTime<Utc>,
}

impl LinkBatch {
    pub fn new(id: i64, links: Vec<LinkCheck>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            links,
            created_at,
        }
    }
}
