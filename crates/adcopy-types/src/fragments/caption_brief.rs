//! The caption brief: the user instruction that asks the model for ad
//! captions in a fixed, on-brand layout.
//!
//! The brief spells out the target layout with literal markers so the model
//! can copy them:
//!
//! ```text
//! FORMAT:
//! 1️⃣ First line: Catchy, interesting hook ending with ☕
//! 2️⃣ Second line: Mention brand name and product with a short description.
//! 3️⃣ Four lines with ✅ bullet points, each with a short USP explanation ...
//! 4️⃣ Final line: A closing sentence with a call to action.
//! ```
//!
//! followed by the form inputs and the output rules. Rendering is a pure
//! function of the [`CaptionRequest`]: empty fields are written as empty
//! text and the USPs are listed `1)` to `4)` in input order.

use adcopy_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};
use adcopy_prompt::builder::PromptBuilder;

use crate::request::CaptionRequest;

/// Emoji every hook is expected to end with.
pub const HOOK_EMOJI: &str = "☕";
/// Glyph that bullets each USP line.
pub const USP_BULLET: &str = "✅";
/// Number of caption variants requested per call.
pub const CAPTION_VARIANTS: usize = 3;

pub const HOOK_MARKER: &str = "1️⃣";
pub const BRAND_MARKER: &str = "2️⃣";
pub const USPS_MARKER: &str = "3️⃣";
pub const CTA_MARKER: &str = "4️⃣";

/// Borrowed view over a request that renders into the caption brief.
#[derive(Debug, Clone, Copy)]
pub struct CaptionBrief<'a> {
    request: &'a CaptionRequest,
}

impl<'a> CaptionBrief<'a> {
    pub fn new(request: &'a CaptionRequest) -> Self {
        Self { request }
    }

    /// Render the instruction text.
    pub fn render(&self) -> String {
        let request = self.request;

        let mut builder = PromptBuilder::new()
            .add_line(format!(
                "You are an expert marketing copywriter who writes consistent, on-brand ad \
                 captions for Meta Ads. Please generate exactly {CAPTION_VARIANTS} ad captions \
                 in the following strict format using the provided inputs."
            ))
            .add_blank_line()
            .add_section("format")
            .add_line(format!(
                "{HOOK_MARKER} First line: Catchy, interesting hook ending with {HOOK_EMOJI}"
            ))
            .add_line(format!(
                "{BRAND_MARKER} Second line: Mention brand name and product with a short description."
            ))
            .add_line(format!(
                "{USPS_MARKER} Four lines with {USP_BULLET} bullet points, each with a short USP \
                 explanation followed by its specified emoji."
            ))
            .add_line(format!(
                "{CTA_MARKER} Final line: A closing sentence with a call to action."
            ))
            .add_blank_line()
            .add_line("Use the following inputs:")
            .add_field("Brand Name and Product", &request.product_name)
            .add_line("USPs and Emojis:");

        for (index, usp) in request.usps.iter().enumerate() {
            builder = builder.add_numbered_item(index + 1, format!("{} {}", usp.text, usp.emoji));
        }

        builder
            .add_field("Hook", &request.hook)
            .add_field("CTA Keywords", &request.cta_keywords)
            .add_blank_line()
            .add_section("important")
            .add_bullet(format!(
                "Follow the structure exactly: hook line, brand line, 4 USPs with {USP_BULLET} \
                 bullet points (each ending with its specified emoji), then final line with CTA."
            ))
            .add_bullet(
                "Do not add extra explanations, disclaimers, or headings like \"Ad 1:\" or \
                 \"Ad 2:\". Just output the captions, separated by a blank line.",
            )
            .finalize()
    }
}

impl IntoPrompt for CaptionBrief<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.render(), GenericRole::User)]
    }
}

/// Build the caption instruction for `request`.
pub fn build_prompt(request: &CaptionRequest) -> String {
    CaptionBrief::new(request).render()
}
