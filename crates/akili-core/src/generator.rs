use crate::llm_config::LlmConfig;
use crate::openai::error::{OpenAiError, ToolCallError};
use crate::openai::tools::{OpenApiField, Tool, ToolChoice};
use crate::openai::{CallConfig, Content, openai_call_with_timeout};
use akili_model::quiz::{OPTIONS_PER_QUESTION, QuestionShapeError, QuizQuestion};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;
use thiserror::Error;

pub const QUESTIONS_PER_QUIZ: usize = 3;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    OpenAi(#[from] OpenAiError),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    MalformedQuestion(#[from] QuestionShapeError),

    #[error("Unexpected response format from LLM")]
    UnexpectedResponseFormat,
}

/// Produces the question set for one quiz attempt.
///
/// The contract is failure tolerant by design: implementations must express
/// every failure as an empty set so a broken service can never crash a quiz
/// session, only fail the attempt.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, module_title: &str, module_content: &str) -> Vec<QuizQuestion>;
}

pub struct OpenAiQuestionGenerator {
    llm_config: LlmConfig,
}

impl OpenAiQuestionGenerator {
    #[must_use]
    pub fn new(llm_config: LlmConfig) -> Self {
        Self { llm_config }
    }

    async fn try_generate(&self, module_title: &str, module_content: &str) -> Result<Vec<QuizQuestion>, GeneratorError> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(
                    "You are an examiner for Akili Academy. You create fair multiple choice \
                     quizzes that can be answered from the provided lesson content alone, \
                     without outside knowledge."
                        .to_owned(),
                ),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(format!(
                    "Based on the following lesson content titled \"{module_title}\", generate a \
                     {QUESTIONS_PER_QUIZ}-question multiple choice quiz. Each question must have \
                     {OPTIONS_PER_QUESTION} options. Include a brief explanation for the correct \
                     answer.\n\nContent: {module_content}"
                )),
                name: None,
            }),
        ];

        let response = openai_call_with_timeout(
            CallConfig::builder().total_timeout(Duration::from_secs(120)).build(),
            self.llm_config.openai_config(),
            Some(0.5),
            self.llm_config.model(),
            messages,
            vec![Box::new(SubmitQuizTool)],
            Some(ToolChoice::Required),
        )
        .await?;

        let Content::Tool(tool_calls) = response.content else {
            return Err(GeneratorError::UnexpectedResponseFormat);
        };
        let call = tool_calls
            .into_iter()
            .next()
            .ok_or(OpenAiError::ToolCall(ToolCallError::Missing))?;
        if call.name != SubmitQuizTool.name() {
            return Err(OpenAiError::ToolCall(ToolCallError::WrongTool {
                expected: SubmitQuizTool.name(),
                got: call.name,
            })
            .into());
        }

        let payload: QuizPayload = serde_json::from_value(call.arguments)?;

        // Fail closed: one malformed entry invalidates the whole response.
        for question in &payload.questions {
            question.validate()?;
        }

        Ok(payload.questions)
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiQuestionGenerator {
    async fn generate(&self, module_title: &str, module_content: &str) -> Vec<QuizQuestion> {
        match self.try_generate(module_title, module_content).await {
            Ok(questions) => questions,
            Err(error) => {
                tracing::warn!(
                    error = &error as &dyn Error,
                    module_title,
                    "quiz generation failed, returning no questions"
                );
                Vec::new()
            }
        }
    }
}

#[derive(Deserialize)]
struct QuizPayload {
    questions: Vec<QuizQuestion>,
}

struct SubmitQuizTool;

impl Tool for SubmitQuizTool {
    fn name(&self) -> &'static str {
        "SubmitQuizTool"
    }

    fn description(&self) -> &'static str {
        "Submits the generated multiple choice quiz to the learner."
    }

    fn parameters(&self) -> serde_json::Value {
        let question = OpenApiField::object()
            .properties(HashMap::from([
                (
                    "question",
                    OpenApiField::new("string").description("The question text."),
                ),
                (
                    "options",
                    OpenApiField::new("array")
                        .description("The answer options, exactly one of which is correct.")
                        .items(OpenApiField::new("string"))
                        .exact_items(OPTIONS_PER_QUESTION),
                ),
                (
                    "correctAnswer",
                    OpenApiField::new("integer").description("Index of the correct option (0-3)."),
                ),
                (
                    "explanation",
                    OpenApiField::new("string").description("A brief explanation of the correct answer."),
                ),
            ]))
            .required(vec!["question", "options", "correctAnswer", "explanation"]);

        let field = OpenApiField::object()
            .properties(HashMap::from([(
                "questions",
                OpenApiField::new("array")
                    .description("The quiz questions, in the order they are asked.")
                    .items(question)
                    .exact_items(QUESTIONS_PER_QUIZ),
            )]))
            .required(vec!["questions"]);

        serde_json::to_value(field).expect("Serialization failed that should not fail")
    }
}
