use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ToolCall(#[from] ToolCallError),

    #[error("No response from OpenAi")]
    EmptyResponse,

    #[error(transparent)]
    HttpClientBuild(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ToolCallError {
    #[error("OpenAi called tool {got} instead of {expected}")]
    WrongTool { expected: &'static str, got: String },

    #[error("No tool call in OpenAi response even though one was required")]
    Missing,
}
