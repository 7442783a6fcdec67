use crate::generator::QuestionGenerator;
use crate::quiz::error::QuizError;
use crate::quiz::passing_score;
use akili_config::CourseModule;
use akili_model::quiz::QuizQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Presenting { index: usize },
    Revealed { index: usize },
    Completed { passed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub selected: usize,
    pub correct: bool,
}

/// One attempt at one module's assessment. The session holds no reference to
/// the profile; nothing is recorded until the caller consumes the terminal
/// phase, so abandoning (dropping) an attempt at any point leaves the learner
/// exactly where they started.
#[derive(Debug)]
pub struct QuizSession {
    module_id: String,
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
    score: usize,
    phase: Phase,
}

impl QuizSession {
    /// Requests a fresh question set for this attempt; questions are never
    /// reused across attempts. A failed or empty generation completes the
    /// attempt immediately as not passed — the learner has to retry.
    pub async fn start<G: QuestionGenerator + ?Sized>(generator: &G, module: &CourseModule) -> Self {
        let questions = generator.generate(&module.title, &module.content).await;
        let phase = if questions.is_empty() {
            tracing::warn!(module_id = module.id, "no questions generated, failing the attempt");
            Phase::Completed { passed: false }
        } else {
            Phase::Presenting { index: 0 }
        };

        Self {
            module_id: module.id.clone(),
            questions,
            answers: Vec::new(),
            score: 0,
            phase,
        }
    }

    #[must_use]
    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            Phase::Presenting { index } | Phase::Revealed { index } => self.questions.get(index),
            Phase::Completed { .. } => None,
        }
    }

    /// Pass/fail outcome once the attempt is over.
    #[must_use]
    pub fn outcome(&self) -> Option<bool> {
        match self.phase {
            Phase::Completed { passed } => Some(passed),
            _ => None,
        }
    }

    /// Records the learner's choice for the current question and reveals the
    /// answer. The first choice is final: answering again while revealed
    /// returns the recorded outcome and leaves the score untouched.
    pub fn answer(&mut self, option: usize) -> Result<Reveal, QuizError> {
        match self.phase {
            Phase::Presenting { index } => {
                let question = &self.questions[index];
                if option >= question.options.len() {
                    return Err(QuizError::InvalidOption {
                        option,
                        options: question.options.len(),
                    });
                }
                let correct = question.is_correct(option);
                if correct {
                    self.score += 1;
                }
                self.answers.push(option);
                self.phase = Phase::Revealed { index };
                Ok(Reveal {
                    selected: option,
                    correct,
                })
            }
            Phase::Revealed { index } => {
                let selected = self.answers[index];
                Ok(Reveal {
                    selected,
                    correct: self.questions[index].is_correct(selected),
                })
            }
            Phase::Completed { .. } => Err(QuizError::AttemptComplete),
        }
    }

    /// Moves past a revealed answer: on to the next question, or past the
    /// last one into the terminal phase with the pass rule applied.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        match self.phase {
            Phase::Revealed { index } => {
                let next = index + 1;
                self.phase = if next < self.questions.len() {
                    Phase::Presenting { index: next }
                } else {
                    Phase::Completed {
                        passed: self.score >= passing_score(self.questions.len()),
                    }
                };
                Ok(self.phase)
            }
            Phase::Presenting { .. } => Err(QuizError::AnswerPending),
            Phase::Completed { .. } => Err(QuizError::AttemptComplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticGenerator(Vec<QuizQuestion>);

    #[async_trait]
    impl QuestionGenerator for StaticGenerator {
        async fn generate(&self, _module_title: &str, _module_content: &str) -> Vec<QuizQuestion> {
            self.0.clone()
        }
    }

    fn question(correct_answer: usize) -> QuizQuestion {
        QuizQuestion {
            question: "q".to_owned(),
            options: vec!["a".to_owned(), "b".to_owned(), "c".to_owned(), "d".to_owned()],
            correct_answer,
            explanation: "e".to_owned(),
        }
    }

    fn module() -> CourseModule {
        CourseModule {
            id: "m1".to_owned(),
            title: "Module".to_owned(),
            description: String::new(),
            content: "content".to_owned(),
            has_project: false,
        }
    }

    async fn session(questions: Vec<QuizQuestion>) -> QuizSession {
        QuizSession::start(&StaticGenerator(questions), &module()).await
    }

    #[tokio::test]
    async fn test_two_of_three_passes() {
        let mut quiz = session(vec![question(0), question(1), question(2)]).await;

        assert!(quiz.answer(0).unwrap().correct);
        quiz.advance().unwrap();
        assert!(quiz.answer(1).unwrap().correct);
        quiz.advance().unwrap();
        assert!(!quiz.answer(0).unwrap().correct);
        assert_eq!(quiz.advance().unwrap(), Phase::Completed { passed: true });
        assert_eq!(quiz.outcome(), Some(true));
        assert_eq!(quiz.score(), 2);
    }

    #[tokio::test]
    async fn test_one_of_three_fails() {
        let mut quiz = session(vec![question(0), question(1), question(2)]).await;

        assert!(quiz.answer(0).unwrap().correct);
        quiz.advance().unwrap();
        quiz.answer(0).unwrap();
        quiz.advance().unwrap();
        quiz.answer(0).unwrap();
        assert_eq!(quiz.advance().unwrap(), Phase::Completed { passed: false });
    }

    #[tokio::test]
    async fn test_generation_failure_fails_the_attempt() {
        let quiz = session(Vec::new()).await;
        assert_eq!(quiz.phase(), Phase::Completed { passed: false });
        assert_eq!(quiz.outcome(), Some(false));
        assert!(quiz.current_question().is_none());
    }

    #[tokio::test]
    async fn test_first_answer_is_final() {
        let mut quiz = session(vec![question(2)]).await;

        let first = quiz.answer(0).unwrap();
        assert!(!first.correct);

        // A second pick while revealed reports the original choice.
        let repeat = quiz.answer(2).unwrap();
        assert_eq!(repeat.selected, 0);
        assert!(!repeat.correct);
        assert_eq!(quiz.score(), 0);
    }

    #[tokio::test]
    async fn test_invalid_option_is_rejected() {
        let mut quiz = session(vec![question(0)]).await;
        assert_eq!(
            quiz.answer(4),
            Err(QuizError::InvalidOption { option: 4, options: 4 })
        );
        // The question is still open afterwards.
        assert_eq!(quiz.phase(), Phase::Presenting { index: 0 });
    }

    #[tokio::test]
    async fn test_advance_requires_an_answer() {
        let mut quiz = session(vec![question(0)]).await;
        assert_eq!(quiz.advance(), Err(QuizError::AnswerPending));
    }

    #[tokio::test]
    async fn test_completed_session_rejects_input() {
        let mut quiz = session(vec![question(0)]).await;
        quiz.answer(0).unwrap();
        quiz.advance().unwrap();
        assert_eq!(quiz.answer(0), Err(QuizError::AttemptComplete));
        assert_eq!(quiz.advance(), Err(QuizError::AttemptComplete));
    }
}
