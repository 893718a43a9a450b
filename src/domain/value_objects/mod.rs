//! Domain Value Objects
//!
//! Immutable value types shared across the domain:
//! - typed identifiers (`UserId`, `QuestionId`, `AnswerId`)
//! - `ContentKind` - what kind of content a delete-history record covers

mod content_kind;
mod ids;

pub use content_kind::ContentKind;
pub use ids::{AnswerId, QuestionId, UserId};
