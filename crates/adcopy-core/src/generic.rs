//! Generic message and role types shared by every layer of the workspace.
//!
//! They mirror the concepts exposed by chat-style provider APIs ("system",
//! "user", "assistant") while staying free of any wire format, so that
//!
//! * a backend converts them into its own structs via `From`/`Into`,
//! * prompt fragments can be unit tested without a transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message independent of any specific LLM provider.
///
/// * `content` – raw UTF-8 text. Emoji and newlines are passed through as is.
/// * `role` – see [`GenericRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use adcopy_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful assistant.".into(),
    ///                               GenericRole::System);
    /// assert_eq!(sys.role, GenericRole::System);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: Some(message),
            role,
            name: None,
        }
    }

    /// Text content, or `""` when the provider sent none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// High-level chat roles recognised by chat completion APIs.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Global behaviour and style guidelines.
    System,
    /// Messages produced by the model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Result of one non-streaming chat completion round-trip.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub content: GenericMessage,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_is_lowercase() {
        assert_eq!(GenericRole::System.to_string(), "system");
        assert_eq!(GenericRole::User.to_string(), "user");
        assert_eq!(GenericRole::Assistant.to_string(), "assistant");
    }

    #[test]
    fn text_defaults_to_empty() {
        let msg = GenericMessage {
            content: None,
            role: GenericRole::Assistant,
            name: None,
        };
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&GenericRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
