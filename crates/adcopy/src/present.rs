//! Terminal rendering of banners, prompts and results.
//!
//! Everything writes into a caller-supplied [`Write`] so the binary can
//! choose stdout or stderr and tests can capture the output.
use std::io::{self, Write};

use adcopy_types::CaptionResult;
use console::style;

pub const TITLE: &str = "Meta Ad Caption Generator";
pub const RESULT_HEADING: &str = "Generated Ad Captions:";
pub const ERROR_PREFIX: &str = "Error generating captions";

/// Title and short introduction shown above the form.
pub fn render_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", style(TITLE).bold().underlined())?;
    writeln!(
        out,
        "This app generates ad captions in a consistent, on-brand format using GPT-4o."
    )?;
    writeln!(
        out,
        "Fill in the product details below, then confirm {}.",
        style("Generate Captions").bold()
    )?;
    writeln!(out)
}

/// Show a caption result exactly as returned, or the error annotation.
pub fn render_result(result: &CaptionResult, out: &mut impl Write) -> io::Result<()> {
    match result {
        CaptionResult::GeneratedText(text) => {
            writeln!(out, "{}", style(RESULT_HEADING).cyan().bold())?;
            writeln!(out)?;
            writeln!(out, "{text}")
        }
        CaptionResult::GenerationError { message } => {
            writeln!(out, "{}", style(format!("{ERROR_PREFIX}: {message}")).red().bold())
        }
    }
}

/// Show the instruction that is (or would be) sent to the model.
pub fn render_prompt(prompt: &str, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", style("Prompt:").dim().bold())?;
    writeln!(out, "{prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(result: &CaptionResult) -> String {
        let mut out = Vec::new();
        render_result(result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_is_shown_verbatim_under_heading() {
        let output = rendered(&CaptionResult::GeneratedText("Line A\n✅ B 🌿".into()));

        assert!(output.contains(RESULT_HEADING));
        assert!(output.ends_with("\nLine A\n✅ B 🌿\n"));
    }

    #[test]
    fn error_is_annotated() {
        let output = rendered(&CaptionResult::GenerationError {
            message: "request failed".into(),
        });

        assert!(output.contains("Error generating captions: request failed"));
        assert!(!output.contains(RESULT_HEADING));
    }

    #[test]
    fn banner_names_the_app() {
        let mut out = Vec::new();
        render_banner(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(TITLE));
    }
}
