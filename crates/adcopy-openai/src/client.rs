use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP client for OpenAI’s *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &"<redacted>")
            .field("base", &self.base)
            .finish()
    }
}

impl OpenAiClient {
    /// Build a client with a default `reqwest` client: 30 s timeout,
    /// Rustls TLS, against the public API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        Self::with_base_url(api_key, None)
    }

    /// Like [`Self::new`] but talking to `base_url` (a proxy or an
    /// OpenAI-compatible server) when given.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self::with_http(api_key, http, base_url))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let url = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, model = %request.model, messages = request.messages.len(), "sending chat completion");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "chat completion rejected");

            return Err(OpenAiError::Api {
                status,
                message: ApiErrorEnvelope::message_from_body(&body),
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = parsed.id.as_deref().unwrap_or_default(),
            choices = parsed.choices.len(),
            "chat completion received"
        );

        Ok(parsed)
    }
}
