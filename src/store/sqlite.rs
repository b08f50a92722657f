use std::path::Path;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use super::{QuestionStore, validate_batch};
use crate::error::{QuizError, Result};
use crate::models::{Label, NewQuestion, Question};

const CREATE_SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY,
        question_text TEXT NOT NULL CHECK (length(trim(question_text)) > 0),
        option_a TEXT NOT NULL CHECK (length(trim(option_a)) > 0),
        option_b TEXT NOT NULL CHECK (length(trim(option_b)) > 0),
        option_c TEXT NOT NULL CHECK (length(trim(option_c)) > 0),
        option_d TEXT NOT NULL CHECK (length(trim(option_d)) > 0),
        correct_option TEXT NOT NULL CHECK (correct_option IN ('A', 'B', 'C', 'D')),
        explanation TEXT
    );
";

const SELECT_RANDOM: &str = r"
    SELECT id, question_text, option_a, option_b, option_c, option_d,
           correct_option, explanation
    FROM questions
    ORDER BY RANDOM()
    LIMIT 1
";

const INSERT_QUESTION: &str = r"
    INSERT INTO questions
        (question_text, option_a, option_b, option_c, option_d, correct_option, explanation)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

impl ToSql for Label {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Label {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_str()?;
        raw.parse()
            .map_err(|_| FromSqlError::Other(format!("unknown option label {raw:?}").into()))
    }
}

/// Question store backed by a single SQLite connection.
///
/// The connection lives as long as the store and is closed when the store
/// is dropped or [`close`](Self::close)d.
pub struct SqliteQuestionStore {
    conn: Connection,
}

impl SqliteQuestionStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened question database");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| QuizError::Storage(err))?;
        debug!("closed question database");
        Ok(())
    }

    fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
        Ok(Question {
            id: row.get(0)?,
            text: row.get(1)?,
            options: [row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?],
            correct_label: row.get(6)?,
            explanation: row.get(7)?,
        })
    }
}

impl QuestionStore for SqliteQuestionStore {
    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(CREATE_SCHEMA)?;
        debug!("question schema ready");
        Ok(())
    }

    fn seed_if_empty(&mut self, defaults: &[NewQuestion]) -> Result<usize> {
        validate_batch(defaults)?;
        let tx = self.conn.transaction()?;

        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        if existing > 0 {
            debug!(existing, "store already populated, skipping seed");
            return Ok(0);
        }

        {
            let mut stmt = tx.prepare(INSERT_QUESTION)?;
            for question in defaults {
                stmt.execute(params![
                    question.text,
                    question.options[0],
                    question.options[1],
                    question.options[2],
                    question.options[3],
                    question.correct_label,
                    question.explanation,
                ])?;
            }
        }
        tx.commit()?;

        info!(inserted = defaults.len(), "seeded question store");
        Ok(defaults.len())
    }

    fn fetch_random_question(&self) -> Result<Question> {
        let question = self
            .conn
            .query_row(SELECT_RANDOM, [], Self::row_to_question)
            .optional()?
            .ok_or(QuizError::EmptyStore)?;

        debug!(id = question.id, "fetched random question");
        Ok(question)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count.max(0) as usize)
    }
}
