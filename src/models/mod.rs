mod question;

pub use question::{Label, NewQuestion, Question, QuestionView, Verdict};
