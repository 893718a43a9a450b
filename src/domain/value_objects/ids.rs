//! Typed identifiers for domain entities
//!
//! Identities are opaque `i64` database keys. The newtypes keep a question
//! id from being passed where a user id is expected.

use serde::{Deserialize, Serialize};

/// Identity of a user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identity value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identity value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a question
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    /// Wrap a raw identity value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identity value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an answer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AnswerId(i64);

impl AnswerId {
    /// Wrap a raw identity value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identity value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AnswerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AnswerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
