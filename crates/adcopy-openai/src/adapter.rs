use std::{env, sync::Arc};

use adcopy_core::error::{AdcopyError, Result};

use crate::client::OpenAiClient;

/// Wires the HTTP client [`OpenAiClient`] into a value that implements
/// [`adcopy_core::provider::ChatCompletionProvider`].
///
/// The adapter owns the API key and a shareable, connection-pooled
/// `reqwest::Client`. It can only be obtained through
/// [`OpenAiAdapterBuilder::build`], so holding one proves the credential was
/// present at startup.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use adcopy_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENAI_API_KEY` and, if set, `OPENAI_BASE_URL` from the
    /// environment.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a proxy or an OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`AdcopyError::Invalid`] – if the API key is missing or blank.
    /// * [`AdcopyError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(AdcopyError::Invalid(
                "missing env variable: `OPENAI_API_KEY`".into(),
            ))?;

        let client = OpenAiClient::with_base_url(api_key, self.base_url)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
