//! Link checking and report generation service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::report;
use crate::domain::checker::LinkChecker;
use crate::domain::entities::{LinkBatch, LinkCheck};
use crate::domain::repositories::BatchRepository;
use crate::error::AppError;

/// Capability consumed by the API layer: check a list of URLs into a new
/// batch, or aggregate stored batches into a rendered report.
#[async_trait]
pub trait LinkService: Send + Sync {
    /// Probes each URL in input order and persists the outcomes as a fresh
    /// batch. An empty input list yields a batch with zero links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only on store faults; per-URL probe
    /// failures are absorbed as [`crate::domain::entities::LinkStatus::NotAvailable`].
    async fn check_links(&self, urls: Vec<String>) -> Result<LinkBatch, AppError>;

    /// Renders a PDF summarizing the requested batches. Unknown batch IDs
    /// are silently dropped; zero matching batches produce a title-only
    /// report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only on store faults.
    async fn generate_report(&self, batch_ids: Vec<i64>) -> Result<Vec<u8>, AppError>;
}

/// Service orchestrating the probe and the batch store.
///
/// The batch ID and `created_at` are fixed before any probe runs; the batch
/// is saved only after every probe has completed, so an abandoned request
/// never persists a partial batch.
pub struct BatchLinkService<R: BatchRepository> {
    repository: Arc<R>,
    checker: Arc<dyn LinkChecker>,
}

impl<R: BatchRepository> BatchLinkService<R> {
    pub fn new(repository: Arc<R>, checker: Arc<dyn LinkChecker>) -> Self {
        Self {
            repository,
            checker,
        }
    }
}

#[async_trait]
impl<R: BatchRepository> LinkService for BatchLinkService<R> {
    async fn check_links(&self, urls: Vec<String>) -> Result<LinkBatch, AppError> {
        let id = self.repository.next_id().await;
        let created_at = Utc::now();

        let mut links = Vec::with_capacity(urls.len());
        for url in urls {
            let status = self.checker.check(&url).await;
            links.push(LinkCheck::new(url, status, Utc::now()));
        }

        let batch = LinkBatch::new(id, links, created_at);
        self.repository.save(batch.clone()).await?;

        tracing::info!(
            batch_id = batch.id,
            links = batch.links.len(),
            "saved link batch"
        );
        Ok(batch)
    }

    async fn generate_report(&self, batch_ids: Vec<i64>) -> Result<Vec<u8>, AppError> {
        let batches = self.repository.get_many(&batch_ids).await?;
        tracing::info!(
            requested = batch_ids.len(),
            found = batches.len(),
            "rendering report"
        );
        Ok(report::render(&batches))
    }
}
