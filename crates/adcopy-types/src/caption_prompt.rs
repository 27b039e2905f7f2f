//! The full message list for one caption request: the fixed system role
//! followed by the caption brief, bound to the caption model.
use adcopy_core::{
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    template::{IntoPrompt, PromptTemplate},
};
use adcopy_prompt::chain::PromptChain;

use crate::{
    fragments::{CaptionBrief, HELPFUL_ASSISTANT, StaticFragment},
    request::CaptionRequest,
};

pub struct CaptionPrompt<'a> {
    request: &'a CaptionRequest,
}

impl<'a> CaptionPrompt<'a> {
    pub fn new(request: &'a CaptionRequest) -> Self {
        Self { request }
    }
}

impl IntoPrompt for CaptionPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::new(HELPFUL_ASSISTANT, GenericRole::System))
            .with(CaptionBrief::new(self.request))
            .build()
    }
}

impl PromptTemplate for CaptionPrompt<'_> {
    const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4o);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::build_prompt;

    #[test]
    fn system_role_then_brief() {
        let request = CaptionRequest::default();
        let messages = CaptionPrompt::new(&request).into_prompt();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[0].text(), "You are a helpful assistant.");
        assert_eq!(messages[1].role, GenericRole::User);
        assert_eq!(messages[1].text(), build_prompt(&request));
    }

    #[test]
    fn targets_gpt4o() {
        assert_eq!(CaptionPrompt::MODEL, Model::OpenAi(OpenAiModel::Gpt4o));
    }
}
