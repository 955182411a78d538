//! In-memory batch storage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::LinkBatch;
use crate::domain::repositories::BatchRepository;
use crate::error::AppError;

/// Process-memory implementation of [`BatchRepository`].
///
/// IDs come from an atomic counter, so concurrent callers always receive
/// distinct values forming a contiguous range from 1. Batches live in an
/// `RwLock`-guarded map with no expiry or eviction; saved batches stay
/// retrievable for the process lifetime.
pub struct InMemoryBatchRepository {
    batches: RwLock<HashMap<i64, LinkBatch>>,
    next_id: AtomicI64,
}

impl InMemoryBatchRepository {
    pub fn new() -> Self {
        Self {
            batches: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryBatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchRepository for InMemoryBatchRepository {
    async fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn save(&self, batch: LinkBatch) -> Result<(), AppError> {
        let mut batches = self.batches.write().await;
        batches.insert(batch.id, batch);
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Option<LinkBatch>, AppError> {
        let batches = self.batches.read().await;
        Ok(batches.get(&id).cloned())
    }

    async fn get_many(&self, ids: &[i64]) -> Result<Vec<LinkBatch>, AppError> {
        let batches = self.batches.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| batches.get(id).cloned())
            .collect())
    }

    async fn count(&self) -> usize {
        self.batches.read().await.len()
    }
}
