//! Model identifiers used throughout the workspace.
//!
//! Application code picks an enum variant and the backend translates it into
//! its own naming scheme, so literal strings such as `"gpt-4o"` live in
//! exactly one place (`adcopy-openai::model_map`).
//!
//! ```rust
//! use adcopy_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4o), Model::OpenAi(OpenAiModel::Gpt4o));
//! ```

/// Universal identifier for an LLM model, grouped by provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
}

/// OpenAI models with a dedicated mapping in the OpenAI backend. Captions
/// are always written by `gpt-4o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4o,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
