//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod delete_history;
mod question;

pub use delete_history::InMemoryDeleteHistoryStore;
pub use question::InMemoryQuestionRepository;
