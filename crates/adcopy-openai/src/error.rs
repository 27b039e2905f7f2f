use adcopy_core::error::AdcopyError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

/// Every failure mode the OpenAI client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key is not a valid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("OpenAI returned non-success status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for AdcopyError {
    fn from(value: OpenAiError) -> Self {
        AdcopyError::Backend(Box::new(value))
    }
}
