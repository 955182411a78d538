//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::BatchRepository;

/// Handler dependencies, cheap to clone per request.
///
/// Handlers depend on the [`LinkService`] capability rather than a concrete
/// service type, so the store and checker can be substituted in tests.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<dyn LinkService>,
    pub batch_repository: Arc<dyn BatchRepository>,
}
