//! Error types for the qna domain
//!
//! Uses `thiserror` for library errors. The deletion workflow surfaces two
//! failure classes to callers: the question could not be resolved, or the
//! requester is not allowed to delete it. Collaborator failures are wrapped
//! rather than flattened so callers can tell validation from storage.

use thiserror::Error;

use crate::domain::ports::{HistoryError, RepositoryError};
use crate::domain::value_objects::{AnswerId, QuestionId, UserId};

/// Result type alias for qna operations
pub type QnaResult<T> = Result<T, QnaError>;

/// Why a deletion request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannotDeleteReason {
    /// The requester is not the question's writer
    NotWriter {
        requester: UserId,
        question: QuestionId,
    },
    /// An answer was written by someone else and blocks the deletion
    ForeignAnswer {
        answer: AnswerId,
        question: QuestionId,
    },
}

impl std::fmt::Display for CannotDeleteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CannotDeleteReason::NotWriter {
                requester,
                question,
            } => {
                write!(f, "user {requester} is not the writer of question {question}")
            }
            CannotDeleteReason::ForeignAnswer { answer, question } => {
                write!(
                    f,
                    "answer {answer} on question {question} was written by another user"
                )
            }
        }
    }
}

/// Main error type for qna operations
#[derive(Error, Debug)]
pub enum QnaError {
    /// No live (non-deleted) question with this id
    #[error("question {0} not found or already deleted")]
    QuestionNotFound(QuestionId),

    /// Ownership validation rejected the deletion; nothing was mutated
    #[error("cannot delete: {0}")]
    CannotDelete(CannotDeleteReason),

    /// Question lookup or write-back failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Persisting the delete-history batch failed
    #[error(transparent)]
    History(#[from] HistoryError),
}

impl QnaError {
    /// True for the not-found failure class
    pub fn is_not_found(&self) -> bool {
        matches!(self, QnaError::QuestionNotFound(_))
    }

    /// True for the authorization failure class
    pub fn is_cannot_delete(&self) -> bool {
        matches!(self, QnaError::CannotDelete(_))
    }
}
