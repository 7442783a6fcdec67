use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {option} is out of range for a question with {options} options")]
    InvalidOption { option: usize, options: usize },

    #[error("the current question must be answered before advancing")]
    AnswerPending,

    #[error("the quiz attempt is already complete")]
    AttemptComplete,
}
