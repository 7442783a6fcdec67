use crate::openai::error::OpenAiError;
use async_openai::types::{
    ChatCompletionTool, ChatCompletionToolArgs, ChatCompletionToolChoiceOption, FunctionObjectArgs,
};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolChoice {
    Auto,
    Required,
}

impl From<ToolChoice> for ChatCompletionToolChoiceOption {
    fn from(choice: ToolChoice) -> Self {
        match choice {
            ToolChoice::Auto => ChatCompletionToolChoiceOption::Auto,
            ToolChoice::Required => ChatCompletionToolChoiceOption::Required,
        }
    }
}

pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn parameters(&self) -> Value;

    fn as_openai_tool(&self) -> Result<ChatCompletionTool, OpenAiError> {
        let function = FunctionObjectArgs::default()
            .name(self.name().to_string())
            .description(self.description().to_string())
            .parameters(self.parameters())
            .strict(false)
            .build()?;

        Ok(ChatCompletionToolArgs::default().function(function).build()?)
    }
}

/// Hand-rolled fragment of an OpenAPI parameter schema; enough for the tool
/// definitions this client sends.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiField<'a> {
    pub r#type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<&'a str, OpenApiField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<OpenApiField<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'a str>,
}

impl<'a> OpenApiField<'a> {
    #[must_use]
    pub fn new(r#type: &'a str) -> Self {
        OpenApiField {
            r#type,
            description: None,
            properties: HashMap::new(),
            items: None,
            min_items: None,
            max_items: None,
            required: vec![],
        }
    }

    #[must_use]
    pub fn object() -> Self {
        OpenApiField::new("object")
    }

    #[must_use]
    pub fn description<D: Into<Cow<'a, str>>>(mut self, description: D) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn properties<I: Into<HashMap<&'a str, OpenApiField<'a>>>>(mut self, properties: I) -> Self {
        self.properties = properties.into();
        self
    }

    #[must_use]
    pub fn items(mut self, items: OpenApiField<'a>) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    #[must_use]
    pub fn exact_items(mut self, count: usize) -> Self {
        self.min_items = Some(count);
        self.max_items = Some(count);
        self
    }

    #[must_use]
    pub fn required<I: Into<Vec<&'a str>>>(mut self, required: I) -> Self {
        self.required = required.into();
        self
    }
}
