use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericChatCompletionResponse, model::Model};

/// A **backend** turns a list of chat messages into a network call to a
/// concrete provider and parses the reply.
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip.
///
/// The method returns a boxed future so the trait stays usable without
/// `async_trait`. The future does not borrow `self`; implementations clone
/// whatever shared state they need into it.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
        }
    }

    pub fn messages(&self) -> &Vec<M> {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }
}
