//! Repository trait for link check batch storage.

use crate::domain::entities::LinkBatch;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for link check batches.
///
/// Safe for concurrent use: ID allocation advances exactly once per call and
/// readers always observe fully written batches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryBatchRepository`] - process-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BatchRepository: Send + Sync {
    /// Returns a fresh batch ID, strictly greater than every previously
    /// issued value. The first issued ID is 1. No two callers ever receive
    /// the same value.
    async fn next_id(&self) -> i64;

    /// Stores the batch under its own ID, overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store faults. The in-memory
    /// implementation never fails.
    async fn save(&self, batch: LinkBatch) -> Result<(), AppError>;

    /// Returns the batch with the given ID, or `None` if absent.
    ///
    /// An unknown ID is not an error. Reads never mutate stored state.
    async fn get(&self, id: i64) -> Result<Option<LinkBatch>, AppError>;

    /// Returns the stored batches among `ids`, in input order.
    ///
    /// Unknown IDs are silently omitted; duplicate IDs yield the batch
    /// repeatedly. Never fails because of unknown or duplicate input.
    async fn get_many(&self, ids: &[i64]) -> Result<Vec<LinkBatch>, AppError>;

    /// Number of batches currently stored.
    async fn count(&self) -> usize;
}
