//! Test fixtures - entity builders shared across integration tests.

use qna::{Answer, Question, User};

/// User with the given id and generated profile fields
pub fn user_with_id(id: i64) -> User {
    User::new(
        id,
        format!("user{id}"),
        format!("User {id}"),
        format!("user{id}@example.com"),
    )
}

/// Question owned by `writer`, with no answers yet
pub fn question_with_writer(id: i64, writer: &User) -> Question {
    Question::new(id, writer.clone(), format!("question {id}"), "question contents")
}

/// Answer on `question` written by `writer`
pub fn answer_for(id: i64, writer: &User, question: &Question) -> Answer {
    Answer::new(id, writer.clone(), question.id(), "answer contents")
}
