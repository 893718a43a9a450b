//! Qna service - the question-deletion workflow
//!
//! Orchestrates deletion: resolve the question, validate ownership of the
//! question and of every answer, then mark everything deleted and hand a
//! single delete-history batch to the history service. Validation runs to
//! completion before any mutation, so a rejected deletion leaves no trace
//! and the history service is never invoked.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::{DeleteHistories, DeleteHistory, User};
use crate::domain::ports::{DeleteHistoryService, QuestionRepository};
use crate::domain::value_objects::QuestionId;
use crate::error::{CannotDeleteReason, QnaError, QnaResult};

/// Question-deletion service
///
/// Owns its collaborators behind ports so tests and embeddings can swap in
/// any storage.
pub struct QnaService {
    question_repository: Box<dyn QuestionRepository>,
    delete_history_service: Box<dyn DeleteHistoryService>,
}

impl QnaService {
    /// Create a service over the given collaborators
    pub fn new(
        question_repository: Box<dyn QuestionRepository>,
        delete_history_service: Box<dyn DeleteHistoryService>,
    ) -> Self {
        Self {
            question_repository,
            delete_history_service,
        }
    }

    /// Delete a question and all of its answers on behalf of `requester`
    ///
    /// The requester must be the question's writer, and every answer must
    /// belong to that same writer; a single foreign answer blocks the whole
    /// deletion, question included. On success the question and its answers
    /// are marked deleted in the repository and one batch of delete-history
    /// records - the question first, then the answers in their arrival
    /// order - is submitted to the history service.
    pub fn delete_question(&self, requester: &User, question_id: QuestionId) -> QnaResult<()> {
        let mut question = self
            .question_repository
            .find_by_id_and_deleted_false(question_id)?
            .ok_or(QnaError::QuestionNotFound(question_id))?;
        debug!(%question_id, requester = %requester.id(), "resolved question for deletion");

        if !question.is_owned_by(requester) {
            warn!(
                %question_id,
                requester = %requester.id(),
                writer = %question.writer().id(),
                "deletion rejected: requester is not the writer"
            );
            return Err(QnaError::CannotDelete(CannotDeleteReason::NotWriter {
                requester: requester.id(),
                question: question_id,
            }));
        }

        // Every answer must pass before anything is mutated; one foreign
        // answer blocks the whole deletion.
        if let Some(foreign) = question
            .answers()
            .iter()
            .find(|answer| !answer.is_owned_by(requester))
        {
            warn!(
                %question_id,
                answer = %foreign.id(),
                writer = %foreign.writer().id(),
                "deletion rejected: answer belongs to another writer"
            );
            return Err(QnaError::CannotDelete(CannotDeleteReason::ForeignAnswer {
                answer: foreign.id(),
                question: question_id,
            }));
        }

        // One timestamp stamps the whole batch.
        let deleted_at = Utc::now();

        question.mark_deleted();
        let mut records = vec![DeleteHistory::of_question(&question, deleted_at)];
        for answer in question.answers_mut() {
            answer.mark_deleted();
            records.push(DeleteHistory::of_answer(answer, deleted_at));
        }

        self.question_repository.save(&question)?;
        self.delete_history_service
            .save_all(DeleteHistories::new(records))?;

        info!(
            %question_id,
            answers = question.answers().len(),
            "question and answers deleted"
        );
        Ok(())
    }
}
