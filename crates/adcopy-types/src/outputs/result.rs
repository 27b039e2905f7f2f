use std::fmt::Display;

/// Outcome of one generate action, displayed once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionResult {
    /// Model output with surrounding whitespace removed.
    GeneratedText(String),
    /// Description of why the single generation call failed. Never empty.
    GenerationError { message: String },
}

impl CaptionResult {
    /// Wrap raw model output, trimming leading and trailing whitespace.
    pub fn generated(raw: &str) -> Self {
        Self::GeneratedText(raw.trim().to_owned())
    }

    /// Wrap a failure, falling back to a generic message when the error
    /// renders as blank text.
    pub fn error(err: impl Display) -> Self {
        let message = err.to_string();
        let message = if message.trim().is_empty() {
            "unknown error".to_owned()
        } else {
            message
        };
        Self::GenerationError { message }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::GenerationError { .. })
    }
}
