use crate::openai::error::OpenAiError;
use crate::openai::tools::{Tool, ToolChoice};
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestMessage, ChatCompletionTool,
    CreateChatCompletionRequestArgs, CreateChatCompletionResponse, FunctionCall,
};
use backoff::ExponentialBackoffBuilder;
use serde_json::Value;
use std::error::Error;
use std::str::FromStr;
use std::time::Duration;
use typed_builder::TypedBuilder;

pub mod error;
pub mod tools;

#[derive(Debug, Clone)]
pub struct Message {
    pub content: Content,
    pub tokens: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum Content {
    Text(String),
    Tool(Vec<ToolCallResponse>),
}

#[derive(Debug, Clone)]
pub struct ToolCallResponse {
    pub name: String,
    pub arguments: Value,
}

impl TryFrom<ChatCompletionMessageToolCall> for ToolCallResponse {
    type Error = OpenAiError;

    fn try_from(value: ChatCompletionMessageToolCall) -> Result<Self, Self::Error> {
        let FunctionCall { name, arguments } = value.function;
        let arguments = Value::from_str(&arguments)?;
        Ok(ToolCallResponse { name, arguments })
    }
}

impl TryFrom<CreateChatCompletionResponse> for Message {
    type Error = OpenAiError;

    fn try_from(value: CreateChatCompletionResponse) -> Result<Message, Self::Error> {
        let tokens = value.usage.map(|u| u.total_tokens);
        let first = value.choices.into_iter().next().ok_or(OpenAiError::EmptyResponse)?;

        if let Some(tool_calls) = first.message.tool_calls {
            let tool_calls: Vec<ToolCallResponse> = tool_calls
                .into_iter()
                .map(std::convert::TryInto::try_into)
                .collect::<Result<_, _>>()?;

            Ok(Message {
                content: Content::Tool(tool_calls),
                tokens,
            })
        } else if let Some(content) = first.message.content {
            Ok(Message {
                content: Content::Text(content),
                tokens,
            })
        } else {
            Err(OpenAiError::EmptyResponse)
        }
    }
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct CallConfig {
    total_timeout: Duration,
    #[builder(default = Duration::from_millis(100))]
    min_retry_interval: Duration,
    #[builder(default = Duration::from_secs(2))]
    max_retry_interval: Duration,
}

/// One blocking chat-completion round trip with a bounded total timeout and
/// exponential backoff between retries.
pub async fn openai_call_with_timeout(
    config: CallConfig,
    openai_config: OpenAIConfig,
    temperature: Option<f32>,
    model: &str,
    messages: Vec<ChatCompletionRequestMessage>,
    tools: Vec<Box<dyn Tool>>,
    tool_choice: Option<ToolChoice>,
) -> Result<Message, OpenAiError> {
    let mut request = CreateChatCompletionRequestArgs::default();
    request.model(model).messages(messages);

    if let Some(temperature) = temperature {
        request.temperature(temperature);
    }

    if !tools.is_empty() {
        let tool_defs = tools
            .iter()
            .map(|tool| tool.as_openai_tool())
            .collect::<Result<Vec<ChatCompletionTool>, OpenAiError>>()?;
        request.tools(tool_defs);
    }

    if let Some(tool_choice) = tool_choice {
        request.tool_choice(tool_choice);
    }

    let request = request.build()?;
    tracing::debug!(model, "sending openai request");

    let http_client = reqwest::Client::builder()
        .timeout(config.total_timeout)
        .build()
        .map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "failed to build http client for openai");
            OpenAiError::HttpClientBuild(error)
        })?;

    let mut backoff_builder = ExponentialBackoffBuilder::default();
    backoff_builder
        .with_initial_interval(config.min_retry_interval)
        .with_max_interval(config.max_retry_interval)
        .with_max_elapsed_time(Some(config.total_timeout));

    let client = Client::with_config(openai_config)
        .with_http_client(http_client)
        .with_backoff(backoff_builder.build());

    let chat_completion = client.chat().create(request).await.map_err(|error| {
        tracing::warn!(error = &error as &dyn Error, "open AI call failed");
        OpenAiError::Api(error)
    })?;

    chat_completion.try_into()
}
