//! Question entity - aggregate root of the deletion workflow

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Answer, User};
use crate::domain::value_objects::QuestionId;

/// A question with its ordered answers
///
/// Answers are attached in arrival order and keep that order for the life
/// of the question; the delete-history batch depends on it. The deleted
/// flag starts false and, once set, never reverts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    contents: String,
    writer: User,
    answers: Vec<Answer>,
    deleted: bool,
}

impl Question {
    /// Create a live question with no answers
    pub fn new(
        id: impl Into<QuestionId>,
        writer: User,
        title: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            contents: contents.into(),
            writer,
            answers: Vec::new(),
            deleted: false,
        }
    }

    /// Attach an answer, preserving arrival order (consuming form)
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.add_answer(answer);
        self
    }

    /// Attach an answer, preserving arrival order
    pub fn add_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// The question's identity
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// The question title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The question body
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The user who wrote this question
    pub fn writer(&self) -> &User {
        &self.writer
    }

    /// The attached answers, in arrival order
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Whether this question has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Check whether `user` wrote this question
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.writer.is_same(user)
    }

    /// Set the deleted flag. The flag never reverts.
    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Mutable access to the answers for the deletion cascade
    pub(crate) fn answers_mut(&mut self) -> impl Iterator<Item = &mut Answer> {
        self.answers.iter_mut()
    }
}
