use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// One of the four fixed option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    /// All labels in display order.
    pub const ALL: [Label; 4] = [Label::A, Label::B, Label::C, Label::D];

    pub fn index(self) -> usize {
        match self {
            Label::A => 0,
            Label::B => 1,
            Label::C => 2,
            Label::D => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            Label::A => 'A',
            Label::B => 'B',
            Label::C => 'C',
            Label::D => 'D',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
            Label::D => "D",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Label::A),
            "B" => Ok(Label::B),
            "C" => Ok(Label::C),
            "D" => Ok(Label::D),
            other => Err(QuizError::InvalidLabel(other.to_string())),
        }
    }
}

/// Question content before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    /// Option texts indexed by [`Label::index`].
    pub options: [String; 4],
    pub correct_label: Label,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl NewQuestion {
    /// Checks the content rules every stored question must satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        for label in Label::ALL {
            if self.options[label.index()].trim().is_empty() {
                return Err(format!("option {} is empty", label));
            }
        }
        Ok(())
    }
}

/// A persisted quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub options: [String; 4],
    pub correct_label: Label,
    pub explanation: Option<String>,
}

impl Question {
    pub fn from_new(id: i64, question: NewQuestion) -> Self {
        Self {
            id,
            text: question.text,
            options: question.options,
            correct_label: question.correct_label,
            explanation: question.explanation,
        }
    }

    pub fn option(&self, label: Label) -> &str {
        &self.options[label.index()]
    }

    /// The answer-free projection shown before judging.
    pub fn view(&self) -> QuestionView {
        QuestionView {
            text: self.text.clone(),
            options: Label::ALL.map(|label| (label, self.option(label).to_string())),
        }
    }
}

/// What the user sees while a round is open. Never carries the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub options: [(Label, String); 4],
}

/// Outcome of judging a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    pub correct_label: Label,
    pub explanation: Option<String>,
}
