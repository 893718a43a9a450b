//! Qna - question and answer domain service with auditable soft deletion
//!
//! Qna models the deletion workflow of a Q&A board: a writer posts a
//! question, other users attach answers, and the writer may later delete
//! the question. Deletion cascades to every answer, is guarded by ownership
//! checks, and records a delete-history batch for auditing.
//!
//! The domain layer is pure and reaches persistence only through ports;
//! `infrastructure` provides in-memory implementations of those ports.

pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use domain::entities::{
    Answer, DeleteHistories, DeleteHistory, DeletedContent, Question, User,
};
pub use domain::ports::{DeleteHistoryService, QuestionRepository};
pub use domain::services::QnaService;
pub use domain::value_objects::{AnswerId, ContentKind, QuestionId, UserId};
pub use error::{CannotDeleteReason, QnaError, QnaResult};
