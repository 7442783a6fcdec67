use crate::assistant::AssistantResponder;
use akili_model::chat::ChatMessage;
use akili_model::track::LearningTrack;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("a reply is already being generated")]
    RequestInFlight,

    #[error("nothing to send")]
    EmptyPrompt,
}

/// The chat surface: owns the conversation history and the one-request-at-a-
/// time rule. The responder itself stays stateless.
#[derive(Debug)]
pub struct Conversation {
    persona: String,
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl Conversation {
    /// `persona` is the full system instruction for this learner, see
    /// [`crate::assistant::system_instruction`].
    #[must_use]
    pub fn new(track: LearningTrack, persona: String) -> Self {
        let welcome = ChatMessage::assistant(format!(
            "Hello! I'm your Akili Academy assistant for the {track} track. How can I help you in your AI journey today?"
        ));
        Self {
            persona,
            messages: vec![welcome],
            in_flight: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Swaps the system instruction for future turns, e.g. after the learner
    /// changes their preferred assistant language. History is kept.
    pub fn set_persona(&mut self, persona: String) {
        self.persona = persona;
    }

    /// One turn: append the learner's prompt, await the responder once, and
    /// append whatever comes back (the responder substitutes its fallback
    /// text on failure, so the history always stays consistent).
    ///
    /// A second call while a request is outstanding is rejected instead of
    /// queued.
    pub async fn ask<R: AssistantResponder + ?Sized>(&mut self, responder: &R, prompt: &str) -> Result<(), ChatError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ChatError::EmptyPrompt);
        }
        if self.in_flight {
            return Err(ChatError::RequestInFlight);
        }

        self.in_flight = true;
        self.messages.push(ChatMessage::user(prompt));
        let reply = responder.respond(prompt, &self.persona).await;
        self.messages.push(ChatMessage::assistant(reply));
        self.in_flight = false;
        Ok(())
    }

    /// The latest assistant reply, for rendering after a turn.
    #[must_use]
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == akili_model::chat::Role::Assistant)
    }
}
