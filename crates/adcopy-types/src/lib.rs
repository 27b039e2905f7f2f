//! Domain types and prompt fragments for caption generation.
//!
//! * [`request`] – the immutable [`CaptionRequest`] captured from the form.
//! * [`fragments`] – [`IntoPrompt`](adcopy_core::template::IntoPrompt)
//!   implementors, including the caption brief template.
//! * [`outputs`] – the [`CaptionResult`] handed to the presenter.
pub mod caption_prompt;
pub mod fragments;
pub mod outputs;
pub mod request;

pub use caption_prompt::CaptionPrompt;
pub use outputs::result::CaptionResult;
pub use request::{CaptionRequest, USP_COUNT, Usp};
