//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports. Only in-memory stores live
//! here: they back the test suites and any embedding that needs no real
//! database.

pub mod repositories;

pub use repositories::{InMemoryDeleteHistoryStore, InMemoryQuestionRepository};
