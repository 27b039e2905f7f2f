//! Builder-style helper for constructing plain-text instruction prompts.
//!
//! Writing long multi-line strings inline is tedious and makes it easy to
//! drop a newline or misnumber a list. `PromptBuilder` offers a fluent API
//! where every method returns `self`:
//!
//! ```rust
//! use adcopy_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_section("FORMAT")
//!     .add_numbered_item(1, "Hook")
//!     .add_blank_line()
//!     .add_field("Hook", "Taste the richness ☕")
//!     .finalize();
//!
//! assert_eq!(text, "FORMAT:\n1) Hook\n\nHook: Taste the richness ☕\n");
//! ```
//!
//! The builder performs **no validation** and no smart formatting. Values
//! are written exactly as given, so an empty value still yields its label
//! and line break.

use std::fmt::{Display, Write as _};

/// Fluent helper that accumulates prompt lines in a `String` buffer.
///
/// Call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        // Writing into a `String` cannot fail.
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Add an upper-case section label followed by a colon: `FORMAT:`.
    pub fn add_section(mut self, title: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{}:", title.to_string().to_uppercase());
        self
    }

    /// Add a `Key: Value` line.
    pub fn add_field(mut self, key: impl Display, value: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{key}: {value}");
        self
    }

    /// Add an item of a numbered list: `3) item`.
    pub fn add_numbered_item(mut self, index: usize, item: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{index}) {item}");
        self
    }

    /// Add a dash-bulleted line: `- item`.
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        let _ = writeln!(self.buffer, "- {item}");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_empty_string() {
        assert_eq!(PromptBuilder::new().finalize(), "");
    }

    #[test]
    fn empty_values_keep_their_labels() {
        let text = PromptBuilder::new()
            .add_field("CTA Keywords", "")
            .add_numbered_item(2, "")
            .finalize();
        assert_eq!(text, "CTA Keywords: \n2) \n");
    }

    #[test]
    fn lines_are_emitted_in_call_order() {
        let text = PromptBuilder::new()
            .add_line("first")
            .add_bullet("second")
            .add_section("important")
            .finalize();
        assert_eq!(text, "first\n- second\nIMPORTANT:\n");
    }
}
