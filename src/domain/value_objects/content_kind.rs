//! ContentKind value object - what a delete-history record covers
//!
//! - `Question` kind: the question itself
//! - `Answer` kind: one of its answers

use serde::{Deserialize, Serialize};

/// Kind of content recorded in a delete-history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// The deleted question
    Question,
    /// One of the question's deleted answers
    Answer,
}

impl ContentKind {
    /// Returns true for the question kind
    pub fn is_question(&self) -> bool {
        matches!(self, ContentKind::Question)
    }

    /// Returns true for the answer kind
    pub fn is_answer(&self) -> bool {
        matches!(self, ContentKind::Answer)
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Question => write!(f, "question"),
            ContentKind::Answer => write!(f, "answer"),
        }
    }
}
