//! Durable home of the quiz questions.
//!
//! The round engine only talks to the [`QuestionStore`] trait; the SQLite
//! backend is what the application runs on, the in-memory backend samples
//! on the client side and backs tests.

mod memory;
mod sqlite;

pub use memory::MemoryQuestionStore;
pub use sqlite::SqliteQuestionStore;

use crate::error::{QuizError, Result};
use crate::models::{NewQuestion, Question};

pub trait QuestionStore {
    /// Create the backing schema if it does not exist yet.
    fn initialize(&mut self) -> Result<()>;

    /// Insert `defaults` in one batch when the store holds no questions.
    ///
    /// Every question is checked with [`NewQuestion::validate`] before
    /// anything is written; one bad question rejects the whole batch with
    /// [`QuizError::InvalidQuestion`]. Returns the number of inserted
    /// questions, `0` when the store was already populated.
    fn seed_if_empty(&mut self, defaults: &[NewQuestion]) -> Result<usize>;

    /// One question chosen uniformly at random.
    ///
    /// Fails with [`QuizError::EmptyStore`](crate::QuizError::EmptyStore)
    /// when nothing has been seeded.
    fn fetch_random_question(&self) -> Result<Question>;

    fn count(&self) -> Result<usize>;
}

/// Reject the batch if any question breaks a content rule.
fn validate_batch(questions: &[NewQuestion]) -> Result<()> {
    for (index, question) in questions.iter().enumerate() {
        question
            .validate()
            .map_err(|reason| QuizError::InvalidQuestion {
                index: index + 1,
                reason,
            })?;
    }
    Ok(())
}
