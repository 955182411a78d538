#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use link_checker::application::services::BatchLinkService;
use link_checker::domain::checker::LinkChecker;
use link_checker::domain::entities::LinkStatus;
use link_checker::infrastructure::persistence::InMemoryBatchRepository;
use link_checker::state::AppState;

/// Checker double that marks the configured URLs available and everything
/// else not available, without touching the network.
pub struct StubLinkChecker {
    available: HashSet<String>,
}

impl StubLinkChecker {
    pub fn new(available: &[&str]) -> Self {
        Self {
            available: available.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl LinkChecker for StubLinkChecker {
    async fn check(&self, url: &str) -> LinkStatus {
        if self.available.contains(url) {
            LinkStatus::Available
        } else {
            LinkStatus::NotAvailable
        }
    }
}

/// Builds an [`AppState`] over a fresh in-memory store and a stub checker.
///
/// Returns the store handle too, so tests can inspect persisted batches.
pub fn create_test_state(available: &[&str]) -> (AppState, Arc<InMemoryBatchRepository>) {
    let repository = Arc::new(InMemoryBatchRepository::new());
    let checker = Arc::new(StubLinkChecker::new(available));
    let link_service = Arc::new(BatchLinkService::new(repository.clone(), checker));

    let state = AppState {
        link_service,
        batch_repository: repository.clone(),
    };

    (state, repository)
}
