//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](adcopy_core::template::IntoPrompt).
//!
//! A caption request is sent as a fixed system instruction followed by the
//! user brief. `PromptChain` lines such fragments up in order without
//! mutable vectors or `extend()` calls:
//!
//! ```rust
//! use adcopy_prompt::chain::PromptChain;
//! use adcopy_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::new("You are a helpful assistant.".into(), GenericRole::System))
//!     .with(GenericMessage::new("Write three captions.".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use adcopy_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
