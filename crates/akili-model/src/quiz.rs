use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The generator contract fixes the option count per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionShapeError {
    #[error("expected {OPTIONS_PER_QUESTION} answer options, got {0}")]
    WrongOptionCount(usize),

    #[error("correct answer index {index} is out of range for {options} options")]
    CorrectAnswerOutOfRange { index: usize, options: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn validate(&self) -> Result<(), QuestionShapeError> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuestionShapeError::WrongOptionCount(self.options.len()));
        }
        if self.correct_answer >= self.options.len() {
            return Err(QuestionShapeError::CorrectAnswerOutOfRange {
                index: self.correct_answer,
                options: self.options.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}
