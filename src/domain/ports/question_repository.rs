//! QuestionRepository port - abstraction for question storage
//!
//! This trait lets the domain resolve and write back questions without
//! knowing about storage details. Implemented by the infrastructure layer.

use thiserror::Error;

use crate::domain::entities::Question;
use crate::domain::value_objects::QuestionId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Question storage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The storage backend failed
    #[error("question storage failed: {0}")]
    Backend(String),
}

/// Abstract store of questions
///
/// Questions are stored as whole aggregates: the answers travel with their
/// question on both lookup and save.
pub trait QuestionRepository {
    /// Find a live (non-deleted) question by id
    ///
    /// Returns `Ok(None)` when the id is unknown or the question has
    /// already been deleted.
    fn find_by_id_and_deleted_false(
        &self,
        id: QuestionId,
    ) -> RepositoryResult<Option<Question>>;

    /// Persist the question's current state, answers included
    fn save(&self, question: &Question) -> RepositoryResult<()>;
}
