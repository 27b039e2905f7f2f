use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default)]
pub struct Usage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
}

/// Body OpenAI sends alongside non-success statuses:
/// `{"error": {"message": "...", "type": "...", "code": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: Option<String>,
    pub code: Option<String>,
}

impl ApiErrorEnvelope {
    /// Human-readable message from an error body, falling back to the raw
    /// body when it is not the documented JSON shape.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.code {
                Some(code) => format!("{} ({code})", envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) => body.trim().to_owned(),
        }
    }
}
