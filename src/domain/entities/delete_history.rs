//! Delete-history records - the audit trail of a deletion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Answer, Question};
use crate::domain::value_objects::{AnswerId, ContentKind, QuestionId, UserId};

/// The subject of a delete-history record: which content was deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum DeletedContent {
    /// A deleted question
    Question(QuestionId),
    /// A deleted answer
    Answer(AnswerId),
}

impl DeletedContent {
    /// The kind tag of this subject
    pub fn kind(&self) -> ContentKind {
        match self {
            DeletedContent::Question(_) => ContentKind::Question,
            DeletedContent::Answer(_) => ContentKind::Answer,
        }
    }
}

/// Audit record for one deleted question or answer
///
/// Created only as a byproduct of a successful deletion and immutable
/// afterwards. Equality covers the subject and the deleting user; the
/// timestamp is excluded, so a record rebuilt later for the same deletion
/// compares equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteHistory {
    content: DeletedContent,
    deleted_by: UserId,
    deleted_at: DateTime<Utc>,
}

impl DeleteHistory {
    /// Record for a deleted question
    pub fn of_question(question: &Question, deleted_at: DateTime<Utc>) -> Self {
        Self {
            content: DeletedContent::Question(question.id()),
            deleted_by: question.writer().id(),
            deleted_at,
        }
    }

    /// Record for a deleted answer
    pub fn of_answer(answer: &Answer, deleted_at: DateTime<Utc>) -> Self {
        Self {
            content: DeletedContent::Answer(answer.id()),
            deleted_by: answer.writer().id(),
            deleted_at,
        }
    }

    /// What was deleted
    pub fn content(&self) -> DeletedContent {
        self.content
    }

    /// The kind tag of the deleted content
    pub fn kind(&self) -> ContentKind {
        self.content.kind()
    }

    /// The user the deletion is attributed to (the content's writer)
    pub fn deleted_by(&self) -> UserId {
        self.deleted_by
    }

    /// When the deletion happened
    pub fn deleted_at(&self) -> DateTime<Utc> {
        self.deleted_at
    }
}

impl PartialEq for DeleteHistory {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content && self.deleted_by == other.deleted_by
    }
}

impl Eq for DeleteHistory {}

/// One deletion's worth of history records, in deletion order
///
/// Equality is order-sensitive sequence equality: the question record comes
/// first, followed by the answer records in the question's answer order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteHistories {
    records: Vec<DeleteHistory>,
}

impl DeleteHistories {
    /// Wrap an ordered batch of records
    pub fn new(records: Vec<DeleteHistory>) -> Self {
        Self { records }
    }

    /// The records in deletion order
    pub fn records(&self) -> &[DeleteHistory] {
        &self.records
    }

    /// Number of records in the batch
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records in deletion order
    pub fn iter(&self) -> impl Iterator<Item = &DeleteHistory> {
        self.records.iter()
    }
}
