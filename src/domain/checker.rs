//! Capability trait for probing a single URL.

use crate::domain::entities::LinkStatus;
use async_trait::async_trait;

/// Reachability probe for one URL.
///
/// Implementations never fail: transport errors, timeouts, and rejected
/// status codes all map to [`LinkStatus::NotAvailable`].
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpLinkChecker`] - outbound HTTP probe
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkChecker: Send + Sync {
    /// Probes `url` once and returns its availability verdict.
    async fn check(&self, url: &str) -> LinkStatus;
}
