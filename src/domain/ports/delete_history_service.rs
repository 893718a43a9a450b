//! DeleteHistoryService port - sink for deletion audit batches
//!
//! This trait lets the domain hand off delete-history batches without
//! knowing how they are persisted. Implemented by the infrastructure layer.

use thiserror::Error;

use crate::domain::entities::DeleteHistories;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Delete-history storage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// The storage backend failed
    #[error("delete history storage failed: {0}")]
    Backend(String),
}

/// Abstract persistence for delete-history batches
///
/// One call persists one whole deletion's batch: it either lands completely
/// or the error propagates to the caller.
pub trait DeleteHistoryService {
    /// Persist a batch of delete-history records
    fn save_all(&self, histories: DeleteHistories) -> HistoryResult<()>;
}
