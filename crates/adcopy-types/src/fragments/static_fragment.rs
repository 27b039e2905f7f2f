//! A fragment that injects a *static* string into the prompt.
//!
//! Used for text that never changes between invocations, such as the system
//! role sent ahead of every caption brief.
//!
//! ```rust
//! use adcopy_types::fragments::{HELPFUL_ASSISTANT, StaticFragment};
//! use adcopy_core::{generic::GenericRole, template::IntoPrompt};
//!
//! let messages = StaticFragment::from(HELPFUL_ASSISTANT).into_prompt();
//! assert_eq!(messages[0].role, GenericRole::System);
//! ```

use adcopy_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// System instruction sent with every caption request.
pub const HELPFUL_ASSISTANT: &str = "You are a helpful assistant.";

/// A borrowed static string bundled with a chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

/// Defaults to the **system** role.
impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let (text, role) = self.0;
        vec![GenericMessage::new(text.to_string(), role)]
    }
}
