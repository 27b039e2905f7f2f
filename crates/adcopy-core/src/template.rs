//! Traits that tie a **prompt** to the messages it expands into and to the
//! model that should answer it.
//!
//! 1. [`IntoPrompt`] – turns a value into an ordered list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model.
//!
//! ```rust
//! use adcopy_core::template::{IntoPrompt, PromptTemplate};
//! use adcopy_core::generic::{GenericMessage, GenericRole};
//! use adcopy_core::model::{Model, OpenAiModel};
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4o);
//! }
//! ```
use crate::model::Model;

/// A prompt bound to a model.
pub trait PromptTemplate: IntoPrompt {
    /// Logical model identifier, mapped by the backend onto its own name.
    const MODEL: Model;
}

/// Converts a value into a series of chat messages.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is a prompt on its own.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
