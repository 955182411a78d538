//! Outbound HTTP reachability probe.

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::checker::LinkChecker;
use crate::domain::entities::LinkStatus;

/// [`LinkChecker`] backed by a shared `reqwest` client.
///
/// Issues a single GET per URL with a fixed timeout and no retries. URLs
/// without an `http://` or `https://` prefix are probed with `http://`
/// prepended; the caller's original string is never altered.
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    /// Builds a checker whose probes time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

/// Returns the URL to probe, prepending the default scheme when missing.
fn probe_url(url: &str) -> Cow<'_, str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("http://{url}"))
    }
}

#[async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn check(&self, url: &str) -> LinkStatus {
        let target = probe_url(url);

        match self.client.get(target.as_ref()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::debug!(%url, status, "probe completed");
                if (200..400).contains(&status) {
                    LinkStatus::Available
                } else {
                    LinkStatus::NotAvailable
                }
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "probe failed");
                LinkStatus::NotAvailable
            }
        }
    }
}
