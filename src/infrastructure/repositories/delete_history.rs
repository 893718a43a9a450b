//! In-memory delete-history store
//!
//! Implements the DeleteHistoryService port by recording batches in call
//! order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::DeleteHistories;
use crate::domain::ports::{DeleteHistoryService, HistoryResult};

/// In-memory implementation of [`DeleteHistoryService`]
///
/// Every saved batch is kept, in call order. Clones share the same
/// underlying store, so a caller can keep a handle and inspect what the
/// service recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeleteHistoryStore {
    batches: Arc<Mutex<Vec<DeleteHistories>>>,
}

impl InMemoryDeleteHistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, Vec<DeleteHistories>> {
        self.batches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All batches saved so far, in call order
    pub fn saved_batches(&self) -> Vec<DeleteHistories> {
        self.store().clone()
    }

    /// Number of batches saved so far
    pub fn batch_count(&self) -> usize {
        self.store().len()
    }
}

impl DeleteHistoryService for InMemoryDeleteHistoryStore {
    fn save_all(&self, histories: DeleteHistories) -> HistoryResult<()> {
        self.store().push(histories);
        Ok(())
    }
}
