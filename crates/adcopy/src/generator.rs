//! The single call site that talks to the generation backend.
//!
//! [`CaptionGenerator::generate`] never fails: whatever goes wrong between
//! building the messages and reading the first choice is folded into
//! [`CaptionResult::GenerationError`], so the presenter only ever sees a
//! value to display.
use std::sync::Arc;

use adcopy_core::{
    error::{AdcopyError, Result},
    generic::GenericMessage,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    template::{IntoPrompt, PromptTemplate},
};
use adcopy_types::{CaptionPrompt, CaptionRequest, CaptionResult};
use tracing::{debug, info, warn};

/// Generates captions through one backend.
///
/// Generic over the backend so tests can plug in a stub provider; the
/// binary uses [`adcopy_openai::OpenAiAdapter`].
#[derive(Debug)]
pub struct CaptionGenerator<B> {
    backend: Arc<B>,
}

impl<B> CaptionGenerator<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one generate action for `request`.
    pub async fn generate(&self, request: &CaptionRequest) -> CaptionResult {
        match self.complete(request).await {
            Ok(text) => {
                info!(chars = text.chars().count(), "captions generated");
                CaptionResult::generated(&text)
            }
            Err(err) => {
                warn!(error = %err, "caption generation failed");
                CaptionResult::error(err)
            }
        }
    }

    async fn complete(&self, request: &CaptionRequest) -> Result<String> {
        let messages = CaptionPrompt::new(request).into_prompt();
        debug!(
            messages = messages.len(),
            model = ?CaptionPrompt::MODEL,
            "requesting captions"
        );

        let params = ChatCompleteParameters::new(messages, CaptionPrompt::MODEL);
        let response = self.backend.chat_complete(params).await?;

        if let Some(usage) = response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        let text = response.content.text();
        if text.trim().is_empty() {
            return Err(AdcopyError::Invalid("model returned an empty completion".into()));
        }

        Ok(text.to_owned())
    }
}
