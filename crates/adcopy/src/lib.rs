//! # `adcopy` – ad captions from a product brief
//!
//! The crate glues the workspace together and hosts the terminal
//! application:
//!
//! | Crate               | What it provides                                                     |
//! |---------------------|----------------------------------------------------------------------|
//! | **`adcopy-core`**   | `ChatCompletionProvider` seam, generic messages, model ids, errors   |
//! | **`adcopy-prompt`** | `PromptBuilder` / `PromptChain` helpers                              |
//! | **`adcopy-types`**  | `CaptionRequest`, `CaptionResult` and the caption brief template     |
//! | **`adcopy-openai`** | reqwest client for OpenAI *chat/completions*                         |
//!
//! A generate action flows strictly in one direction:
//!
//! ```text
//! form ──► CaptionRequest ──► CaptionBrief ──► CaptionGenerator ──► CaptionResult ──► presenter
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use adcopy::{CaptionGenerator, Settings, types::CaptionRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_env()?;
//!     let generator = CaptionGenerator::new(settings.backend()?);
//!     let result = generator.generate(&CaptionRequest::default()).await;
//!     println!("{result:?}");
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod form;
pub mod generator;
pub mod present;

pub use adcopy_core::*;
pub use adcopy_openai as openai;
pub use adcopy_prompt as prompt;
pub use adcopy_types as types;

pub use config::{ConfigError, Settings};
pub use generator::CaptionGenerator;
