//! The round engine: one open question at a time, judged once.

use tracing::{debug, info};

use crate::error::{QuizError, Result};
use crate::models::{Label, Question, QuestionView, Verdict};
use crate::store::QuestionStore;

/// Where the engine is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No question on screen.
    Idle,
    /// A question is displayed and unanswered.
    AwaitingAnswer,
}

pub struct RoundEngine<S> {
    store: S,
    active_question: Option<Question>,
}

impl<S: QuestionStore> RoundEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            active_question: None,
        }
    }

    pub fn state(&self) -> RoundState {
        if self.active_question.is_some() {
            RoundState::AwaitingAnswer
        } else {
            RoundState::Idle
        }
    }

    /// Draw a fresh question and open a round for it.
    ///
    /// An unanswered question from a previous round is dropped. On failure
    /// the current round is left as it was.
    pub fn start_round(&mut self) -> Result<QuestionView> {
        let question = self.store.fetch_random_question()?;
        if let Some(skipped) = &self.active_question {
            debug!(id = skipped.id, "skipping unanswered question");
        }
        info!(id = question.id, "round started");

        let view = question.view();
        self.active_question = Some(question);
        Ok(view)
    }

    /// Judge a raw label such as `"B"`.
    pub fn submit_answer(&mut self, label: &str) -> Result<Verdict> {
        if self.active_question.is_none() {
            return Err(QuizError::NoActiveRound);
        }
        self.submit(label.parse()?)
    }

    /// Judge an already parsed label and close the round.
    pub fn submit(&mut self, label: Label) -> Result<Verdict> {
        let question = self.active_question.take().ok_or(QuizError::NoActiveRound)?;
        let is_correct = label == question.correct_label;
        info!(id = question.id, answer = %label, is_correct, "answer judged");

        Ok(Verdict {
            is_correct,
            correct_label: question.correct_label,
            explanation: question.explanation,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to close it explicitly on shutdown.
    pub fn into_store(self) -> S {
        self.store
    }
}
