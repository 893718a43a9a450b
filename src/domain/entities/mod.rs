//! Domain Entities
//!
//! Core domain entities with identity and lifecycle.
//! - `User` - identity holder for writers and requesters
//! - `Question` - aggregate root owning its answers
//! - `Answer` - a reply attached to a question
//! - `DeleteHistory` / `DeleteHistories` - audit records of a deletion

mod answer;
mod delete_history;
mod question;
mod user;

pub use answer::Answer;
pub use delete_history::{DeleteHistories, DeleteHistory, DeletedContent};
pub use question::Question;
pub use user::User;
