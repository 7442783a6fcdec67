use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// Appended to the conversation whenever the responder fails; the history
/// must stay consistent even when the service does not answer.
pub const ASSISTANT_FALLBACK_REPLY: &str =
    "There was an unexpected error. Please check your connection or try again shortly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::with_role(Role::User, content)
    }

    #[must_use]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::with_role(Role::Assistant, content)
    }

    fn with_role<S: Into<String>>(role: Role, content: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(r#""user""#, serde_json::to_string(&Role::User).unwrap());
        assert_eq!(r#""assistant""#, serde_json::to_string(&Role::Assistant).unwrap());
    }

    #[test]
    fn test_constructors() {
        let message = ChatMessage::user("How do neural networks learn?");
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "How do neural networks learn?");
    }
}
