//! # python-quiz
//!
//! A single-player multiple-choice quiz backed by SQLite, played in the
//! terminal.
//!
//! The core is split in two: a [`QuestionStore`] that owns the questions and
//! hands out random ones, and a [`RoundEngine`] that keeps the question on
//! screen and judges the answer. The terminal front end ([`App`]) only talks
//! to the engine.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use python_quiz::{Config, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::open(&Config::default())?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod engine;
mod error;
pub mod keymap;
pub mod logging;
mod models;
pub mod store;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

pub use app::{App, Screen};
pub use config::Config;
pub use data::{load_questions_from_json, sample_questions};
pub use engine::{RoundEngine, RoundState};
pub use error::{LoadError, QuizError};
pub use models::{Label, NewQuestion, Question, QuestionView, Verdict};
pub use store::{MemoryQuestionStore, QuestionStore, SqliteQuestionStore};

use terminal::{AppTerminal, TerminalSession};

/// A quiz wired to its SQLite database, ready to run in the terminal.
pub struct Quiz {
    app: App<SqliteQuestionStore>,
}

impl Quiz {
    /// Wrap an already initialized and seeded store.
    pub fn new(store: SqliteQuestionStore) -> Self {
        Self {
            app: App::new(RoundEngine::new(store)),
        }
    }

    /// Open the database from `config`, create the schema and seed it if empty.
    ///
    /// Any failure here aborts startup.
    pub fn open(config: &Config) -> Result<Self, QuizError> {
        let mut store = SqliteQuestionStore::open(&config.database)?;
        store.initialize()?;

        let seed = config.seed_questions()?;
        store.seed_if_empty(&seed)?;
        info!(questions = store.count()?, "question store ready");

        Ok(Self::new(store))
    }

    /// Run the quiz in the terminal until the user quits.
    ///
    /// The terminal is restored and the database closed on every way out of
    /// this function.
    pub fn run(self) -> Result<(), QuizError> {
        let mut app = self.app;

        let result = {
            let mut session = TerminalSession::start()?;
            app.next_question();
            run_event_loop(session.terminal(), &mut app)
        };

        let closed = app.into_engine().into_store().close();
        info!("quiz closed");
        result.and(closed)
    }

    /// The front-end state, e.g. to inspect the store after [`Quiz::open`].
    pub fn app(&self) -> &App<SqliteQuestionStore> {
        &self.app
    }
}

fn run_event_loop<S: QuestionStore>(
    terminal: &mut AppTerminal,
    app: &mut App<S>,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.handle_key(key) {
                break;
            }
        }
    }

    Ok(())
}
