//! Property tests for the question-deletion workflow.

use proptest::prelude::*;

use qna::infrastructure::{InMemoryDeleteHistoryStore, InMemoryQuestionRepository};
use qna::{Answer, AnswerId, DeletedContent, Question, QuestionId, QnaService, User};

fn user(id: i64) -> User {
    User::new(
        id,
        format!("user{id}"),
        format!("User {id}"),
        format!("user{id}@example.com"),
    )
}

/// Question id 1 owned by `writer`, with one answer per entry of
/// `answer_writers` (answer ids 1..=n, in order).
fn seeded_question(writer: &User, answer_writers: &[i64]) -> Question {
    let mut question = Question::new(1, writer.clone(), "title", "contents");
    for (index, writer_id) in answer_writers.iter().enumerate() {
        let answer_id = index as i64 + 1;
        question.add_answer(Answer::new(
            answer_id,
            user(*writer_id),
            question.id(),
            "contents",
        ));
    }
    question
}

fn service_over(
    repo: &InMemoryQuestionRepository,
    history: &InMemoryDeleteHistoryStore,
) -> QnaService {
    QnaService::new(Box::new(repo.clone()), Box::new(history.clone()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: when the requester wrote the question and every answer,
    /// deletion succeeds, every flag is set, and exactly one batch is
    /// recorded: the question first, then the answers in arrival order.
    #[test]
    fn property_uniform_ownership_always_deletes_everything(
        writer_id in 1i64..1000,
        answer_count in 0usize..8,
    ) {
        let writer = user(writer_id);
        let repo = InMemoryQuestionRepository::new();
        repo.insert(seeded_question(&writer, &vec![writer_id; answer_count]));
        let history = InMemoryDeleteHistoryStore::new();
        let service = service_over(&repo, &history);

        let result = service.delete_question(&writer, QuestionId::new(1));
        prop_assert!(result.is_ok());

        let stored = repo.get(QuestionId::new(1)).unwrap();
        prop_assert!(stored.is_deleted());
        prop_assert!(stored.answers().iter().all(|a| a.is_deleted()));

        let batches = history.saved_batches();
        prop_assert_eq!(batches.len(), 1);
        let records = batches[0].records();
        prop_assert_eq!(records.len(), answer_count + 1);
        prop_assert_eq!(
            records[0].content(),
            DeletedContent::Question(QuestionId::new(1))
        );
        for (index, record) in records[1..].iter().enumerate() {
            prop_assert_eq!(
                record.content(),
                DeletedContent::Answer(AnswerId::new(index as i64 + 1))
            );
        }
    }

    /// PROPERTY: a requester who is not the writer is always rejected;
    /// nothing is mutated and the history service is never invoked.
    #[test]
    fn property_foreign_requester_never_deletes(
        writer_id in 1i64..500,
        offset in 1i64..500,
        answer_count in 0usize..8,
    ) {
        let writer = user(writer_id);
        let requester = user(writer_id + offset);
        let repo = InMemoryQuestionRepository::new();
        repo.insert(seeded_question(&writer, &vec![writer_id; answer_count]));
        let history = InMemoryDeleteHistoryStore::new();
        let service = service_over(&repo, &history);

        let err = service
            .delete_question(&requester, QuestionId::new(1))
            .unwrap_err();
        prop_assert!(err.is_cannot_delete());

        let stored = repo.get(QuestionId::new(1)).unwrap();
        prop_assert!(!stored.is_deleted());
        prop_assert!(stored.answers().iter().all(|a| !a.is_deleted()));
        prop_assert_eq!(history.batch_count(), 0);
    }

    /// PROPERTY: one foreign answer anywhere in the list blocks the whole
    /// deletion, even for the question's own writer.
    #[test]
    fn property_foreign_answer_blocks_the_writer(
        writer_id in 1i64..500,
        foreign_offset in 1i64..500,
        answer_count in 1usize..8,
        position_seed in 0usize..8,
    ) {
        let writer = user(writer_id);
        let mut answer_writers = vec![writer_id; answer_count];
        answer_writers[position_seed % answer_count] = writer_id + foreign_offset;

        let repo = InMemoryQuestionRepository::new();
        repo.insert(seeded_question(&writer, &answer_writers));
        let history = InMemoryDeleteHistoryStore::new();
        let service = service_over(&repo, &history);

        let err = service
            .delete_question(&writer, QuestionId::new(1))
            .unwrap_err();
        prop_assert!(err.is_cannot_delete());

        let stored = repo.get(QuestionId::new(1)).unwrap();
        prop_assert!(!stored.is_deleted());
        prop_assert!(stored.answers().iter().all(|a| !a.is_deleted()));
        prop_assert_eq!(history.batch_count(), 0);
    }
}
