use rand::Rng;
use tracing::debug;

use super::{QuestionStore, validate_batch};
use crate::error::{QuizError, Result};
use crate::models::{NewQuestion, Question};

/// Non-durable store that samples uniformly over its rows on the client side.
#[derive(Debug)]
pub struct MemoryQuestionStore {
    questions: Vec<Question>,
    next_id: i64,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_questions(questions: Vec<NewQuestion>) -> Self {
        let mut store = Self::new();
        store.insert_all(questions);
        store
    }

    fn insert_all(&mut self, questions: impl IntoIterator<Item = NewQuestion>) {
        for question in questions {
            self.questions.push(Question::from_new(self.next_id, question));
            self.next_id += 1;
        }
    }
}

impl Default for MemoryQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore for MemoryQuestionStore {
    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    fn seed_if_empty(&mut self, defaults: &[NewQuestion]) -> Result<usize> {
        validate_batch(defaults)?;
        if !self.questions.is_empty() {
            return Ok(0);
        }
        self.insert_all(defaults.iter().cloned());
        debug!(inserted = defaults.len(), "seeded in-memory store");
        Ok(defaults.len())
    }

    fn fetch_random_question(&self) -> Result<Question> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyStore);
        }
        let index = rand::rng().random_range(0..self.questions.len());
        Ok(self.questions[index].clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::data::sample_questions;

    #[test]
    fn assigns_sequential_ids_from_one() {
        let mut store = MemoryQuestionStore::default();
        store.initialize().unwrap();
        store.seed_if_empty(&sample_questions().unwrap()).unwrap();
        let mut ids: Vec<i64> = (0..200)
            .map(|_| store.fetch_random_question().unwrap().id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn seed_only_fills_empty_store() {
        let mut store = MemoryQuestionStore::new();
        let samples = sample_questions().unwrap();
        assert_eq!(store.seed_if_empty(&samples).unwrap(), 5);
        assert_eq!(store.seed_if_empty(&samples).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 5);
    }

    #[test]
    fn empty_store_refuses_fetch() {
        let store = MemoryQuestionStore::new();
        assert!(matches!(
            store.fetch_random_question(),
            Err(QuizError::EmptyStore)
        ));
    }

    #[test]
    fn sampling_covers_every_row_evenly() {
        let store = MemoryQuestionStore::with_questions(sample_questions().unwrap());
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for _ in 0..2000 {
            *counts.entry(store.fetch_random_question().unwrap().id).or_default() += 1;
        }
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| (200..=600).contains(&count)));
    }

    #[test]
    fn blank_question_rejects_whole_batch() {
        let mut questions = sample_questions().unwrap();
        questions[2].text = "   ".to_string();

        let mut store = MemoryQuestionStore::new();
        match store.seed_if_empty(&questions) {
            Err(QuizError::InvalidQuestion { index, reason }) => {
                assert_eq!(index, 3);
                assert_eq!(reason, "question text is empty");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(store.count().unwrap(), 0);
        assert!(matches!(
            store.fetch_random_question(),
            Err(QuizError::EmptyStore)
        ));
    }
}
