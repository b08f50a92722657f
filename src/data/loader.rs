use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::models::NewQuestion;

const SAMPLE_QUESTIONS: &str = include_str!("sample_questions.json");
const SAMPLE_QUESTIONS_NAME: &str = "<built-in sample questions>";

/// The five built-in questions used to seed an empty store.
pub fn sample_questions() -> Result<Vec<NewQuestion>, LoadError> {
    parse_questions(Path::new(SAMPLE_QUESTIONS_NAME), SAMPLE_QUESTIONS)
}

/// Load a seed set from a JSON array of questions.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<NewQuestion>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions(path, &json_content)
}

fn parse_questions(path: &Path, json_content: &str) -> Result<Vec<NewQuestion>, LoadError> {
    let questions: Vec<NewQuestion> =
        serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    for (index, question) in questions.iter().enumerate() {
        question.validate().map_err(|reason| LoadError::Invalid {
            path: PathBuf::from(path),
            index: index + 1,
            reason,
        })?;
    }

    Ok(questions)
}
