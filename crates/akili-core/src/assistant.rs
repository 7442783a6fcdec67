use crate::llm_config::LlmConfig;
use crate::openai::error::OpenAiError;
use crate::openai::{CallConfig, Content, openai_call_with_timeout};
use akili_model::chat::ASSISTANT_FALLBACK_REPLY;
use akili_model::profile::AssistantLanguage;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
};
use async_trait::async_trait;
use std::error::Error;
use std::time::Duration;

const COMMON_PERSONA: &str = "You are the AI learning assistant for Akili Academy, based in Uganda. \
Your goal is to be a supportive educator who provides clean, easy-to-read information.

OUTPUT FORMATTING RULES:
- Be EXTREMELY PRECISE and CONCISE. Avoid long introductions or filler.
- Use simple BULLET POINTS (-) for lists of more than two items.
- DO NOT use Markdown header symbols. If you need a section title, use BOLD text or CAPITAL letters instead.
- Ensure the output looks like a clean, professional text message.
- Use bold text sparingly for critical terms.
- Reference local East African examples (ride apps, mobile money, local agriculture) to keep answers relevant.";

/// The full system instruction for one chat turn: the academy framing, the
/// track's persona line from the curriculum, and the learner's preferred
/// language for local analogies.
#[must_use]
pub fn system_instruction(track_persona: &str, language: AssistantLanguage) -> String {
    format!("{COMMON_PERSONA} {track_persona} Use {language} for local analogies and examples when it helps.")
}

/// Answers one free-text prompt under a persona.
///
/// Stateless per call: conversation history is owned by the chat surface,
/// not by implementations. Failures never surface as errors, only as the
/// fixed fallback reply.
#[async_trait]
pub trait AssistantResponder: Send + Sync {
    async fn respond(&self, prompt: &str, persona: &str) -> String;
}

pub struct OpenAiAssistantResponder {
    llm_config: LlmConfig,
}

impl OpenAiAssistantResponder {
    #[must_use]
    pub fn new(llm_config: LlmConfig) -> Self {
        Self { llm_config }
    }

    async fn try_respond(&self, prompt: &str, persona: &str) -> Result<String, OpenAiError> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(persona.to_owned()),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(prompt.to_owned()),
                name: None,
            }),
        ];

        let response = openai_call_with_timeout(
            CallConfig::builder().total_timeout(Duration::from_secs(60)).build(),
            self.llm_config.openai_config(),
            Some(0.5),
            self.llm_config.model(),
            messages,
            Vec::new(),
            None,
        )
        .await?;

        match response.content {
            Content::Text(text) => Ok(text),
            Content::Tool(_) => Err(OpenAiError::EmptyResponse),
        }
    }
}

#[async_trait]
impl AssistantResponder for OpenAiAssistantResponder {
    async fn respond(&self, prompt: &str, persona: &str) -> String {
        match self.try_respond(prompt, persona).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, "assistant call failed, using fallback reply");
                ASSISTANT_FALLBACK_REPLY.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_weaves_track_and_language() {
        let instruction = system_instruction("Track: AI Explorers.", AssistantLanguage::Luganda);
        assert!(instruction.contains("Akili Academy"));
        assert!(instruction.contains("Track: AI Explorers."));
        assert!(instruction.contains("Luganda"));
    }
}
