use crossterm::event::KeyEvent;
use tracing::{error, warn};

use crate::engine::RoundEngine;
use crate::error::QuizError;
use crate::keymap::{Action, Direction, KeyMap};
use crate::models::{Label, QuestionView, Verdict};
use crate::store::QuestionStore;

/// What the main area of the screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// No question loaded yet, or loading the first one failed.
    Empty,
    /// A question waiting for an answer.
    Question { view: QuestionView, selected: Label },
    /// A judged question; the options stay visible but disabled.
    Answered {
        view: QuestionView,
        chosen: Label,
        verdict: Verdict,
        feedback_open: bool,
    },
}

/// Front-end state driving one [`RoundEngine`].
pub struct App<S> {
    engine: RoundEngine<S>,
    keymap: KeyMap,
    screen: Screen,
    error: Option<String>,
}

impl<S: QuestionStore> App<S> {
    pub fn new(engine: RoundEngine<S>) -> Self {
        Self {
            engine,
            keymap: KeyMap::new(),
            screen: Screen::Empty,
            error: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Message of the error popup, if one is open.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    pub fn into_engine(self) -> RoundEngine<S> {
        self.engine
    }

    /// Load the next question, replacing whatever is on screen.
    pub fn next_question(&mut self) {
        match self.engine.start_round() {
            Ok(view) => {
                self.screen = Screen::Question {
                    view,
                    selected: Label::A,
                };
            }
            Err(err) => self.show_error(err),
        }
    }

    /// Answer the open question. Ignored once the question has been judged.
    pub fn answer(&mut self, label: Label) {
        let Screen::Question { view, .. } = &self.screen else {
            return;
        };
        let view = view.clone();

        match self.engine.submit(label) {
            Ok(verdict) => {
                self.screen = Screen::Answered {
                    view,
                    chosen: label,
                    verdict,
                    feedback_open: true,
                };
            }
            Err(err) => self.show_error(err),
        }
    }

    pub fn move_selection(&mut self, direction: Direction) {
        if let Screen::Question { selected, .. } = &mut self.screen {
            *selected = moved(*selected, direction);
        }
    }

    /// Returns true if the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.keymap.action_for(key) else {
            return false;
        };

        if self.error.is_some() {
            return match action {
                Action::Quit => true,
                Action::Confirm | Action::Back => {
                    self.error = None;
                    false
                }
                _ => false,
            };
        }

        if let Screen::Answered {
            feedback_open: true,
            ..
        } = self.screen
        {
            return match action {
                Action::Quit => true,
                Action::Confirm | Action::Back => {
                    self.close_feedback();
                    false
                }
                Action::NextQuestion => {
                    self.next_question();
                    false
                }
                _ => false,
            };
        }

        match action {
            Action::Answer(label) => self.answer(label),
            Action::Move(direction) => self.move_selection(direction),
            Action::Confirm => match &self.screen {
                Screen::Question { selected, .. } => {
                    let label = *selected;
                    self.answer(label);
                }
                Screen::Answered { .. } | Screen::Empty => self.next_question(),
            },
            Action::NextQuestion => self.next_question(),
            Action::Back | Action::Quit => return true,
        }
        false
    }

    fn close_feedback(&mut self) {
        if let Screen::Answered { feedback_open, .. } = &mut self.screen {
            *feedback_open = false;
        }
    }

    fn show_error(&mut self, err: QuizError) {
        if err.is_recoverable() {
            warn!(error = %err, "round operation failed");
        } else {
            error!(error = %err, "round operation failed");
        }
        self.error = Some(err.to_string());
    }
}

/// Options sit in a 2x2 grid: A B on top, C D below.
fn moved(label: Label, direction: Direction) -> Label {
    let index = label.index();
    let (row, col) = (index / 2, index % 2);
    let (row, col) = match direction {
        Direction::Up => (0, col),
        Direction::Down => (1, col),
        Direction::Left => (row, 0),
        Direction::Right => (row, 1),
    };
    Label::from_index(row * 2 + col).unwrap_or(label)
}
