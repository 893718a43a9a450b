//! In-memory question repository
//!
//! Implements the QuestionRepository port over a shared map.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::Question;
use crate::domain::ports::{QuestionRepository, RepositoryResult};
use crate::domain::value_objects::QuestionId;

/// In-memory implementation of [`QuestionRepository`]
///
/// Clones share the same underlying store, so a caller can keep a handle
/// and observe what the service persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<Mutex<BTreeMap<QuestionId, Question>>>,
}

impl InMemoryQuestionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> MutexGuard<'_, BTreeMap<QuestionId, Question>> {
        self.questions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a question, replacing any previous one with the same id
    pub fn insert(&self, question: Question) {
        self.store().insert(question.id(), question);
    }

    /// Fetch a question regardless of its deleted flag
    pub fn get(&self, id: QuestionId) -> Option<Question> {
        self.store().get(&id).cloned()
    }

    /// Number of stored questions, deleted ones included
    pub fn len(&self) -> usize {
        self.store().len()
    }

    /// Whether the store holds no questions
    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn find_by_id_and_deleted_false(
        &self,
        id: QuestionId,
    ) -> RepositoryResult<Option<Question>> {
        let found = self
            .store()
            .get(&id)
            .filter(|question| !question.is_deleted())
            .cloned();
        Ok(found)
    }

    fn save(&self, question: &Question) -> RepositoryResult<()> {
        self.store().insert(question.id(), question.clone());
        Ok(())
    }
}
