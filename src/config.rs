use std::path::PathBuf;

use crate::data::{load_questions_from_json, sample_questions};
use crate::error::LoadError;
use crate::models::NewQuestion;

pub const DEFAULT_DATABASE_PATH: &str = "python_quiz.db";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Startup settings for the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file holding the questions.
    pub database: PathBuf,
    /// JSON file to seed an empty database from, instead of the built-in set.
    pub questions: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Config {
    /// The questions to seed an empty store with.
    pub fn seed_questions(&self) -> Result<Vec<NewQuestion>, LoadError> {
        match &self.questions {
            Some(path) => load_questions_from_json(path),
            None => sample_questions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            questions: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}
