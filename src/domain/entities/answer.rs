//! Answer entity - a reply attached to a question

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::domain::value_objects::{AnswerId, QuestionId};

/// An answer posted to a question
///
/// Starts out live; the deleted flag is only ever set through the deletion
/// of the parent question and never reverts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    id: AnswerId,
    writer: User,
    question_id: QuestionId,
    contents: String,
    deleted: bool,
}

impl Answer {
    /// Create a live answer for the given question
    pub fn new(
        id: impl Into<AnswerId>,
        writer: User,
        question_id: impl Into<QuestionId>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            writer,
            question_id: question_id.into(),
            contents: contents.into(),
            deleted: false,
        }
    }

    /// The answer's identity
    pub fn id(&self) -> AnswerId {
        self.id
    }

    /// The user who wrote this answer
    pub fn writer(&self) -> &User {
        &self.writer
    }

    /// The question this answer belongs to
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// The answer text
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Whether this answer has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Check whether `user` wrote this answer
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.writer.is_same(user)
    }

    /// Set the deleted flag. The flag never reverts; answers are only
    /// deleted through their parent question's deletion.
    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> User {
        User::new(1, "alice", "Alice", "alice@example.com")
    }

    #[test]
    fn new_answer_is_not_deleted() {
        let answer = Answer::new(1, writer(), 1, "contents");
        assert!(!answer.is_deleted());
    }

    #[test]
    fn ownership_follows_writer_identity() {
        let answer = Answer::new(1, writer(), 1, "contents");
        assert!(answer.is_owned_by(&writer()));

        let other = User::new(2, "bob", "Bob", "bob@example.com");
        assert!(!answer.is_owned_by(&other));
    }

    #[test]
    fn mark_deleted_latches() {
        let mut answer = Answer::new(1, writer(), 1, "contents");
        answer.mark_deleted();
        assert!(answer.is_deleted());
        answer.mark_deleted();
        assert!(answer.is_deleted());
    }

    #[test]
    fn accessors_expose_fields() {
        let answer = Answer::new(3, writer(), 7, "some reply");
        assert_eq!(answer.id().value(), 3);
        assert_eq!(answer.question_id().value(), 7);
        assert_eq!(answer.contents(), "some reply");
        assert_eq!(answer.writer().id().value(), 1);
    }
}
