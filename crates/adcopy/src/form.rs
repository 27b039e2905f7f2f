//! Interactive caption form.
//!
//! The form is the only stateful piece of the UI: it keeps the values of the
//! last round so a user can tweak one field and generate again. Each round
//! ends by handing out a fresh, immutable [`CaptionRequest`].
use adcopy_types::{CaptionRequest, USP_COUNT, Usp};
use anyhow::{Context, Result};
use console::{Term, style};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// A labelled text input with an example shown as a hint.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub const PRODUCT_FIELD: FormField = FormField {
    label: "Product Name / Brand",
    placeholder: "e.g., Paul John Caffeine",
};

pub const HOOK_FIELD: FormField = FormField {
    label: "Catchy Hook (ends with ☕)",
    placeholder: "e.g., Taste the richness only Indian coffee can deliver ☕",
};

pub const CTA_FIELD: FormField = FormField {
    label: "CTA Keywords",
    placeholder: "e.g., brew bold, stay grounded, sip with meaning",
};

pub const USP_FIELDS: [(FormField, FormField); USP_COUNT] = [
    (
        FormField {
            label: "USP 1",
            placeholder: "e.g., Shade-grown in India – Infused with notes of lychee, citrus, and pepper",
        },
        FormField {
            label: "Emoji for USP 1",
            placeholder: "e.g., 🌿",
        },
    ),
    (
        FormField {
            label: "USP 2",
            placeholder: "e.g., Freshly roasted in the U.S. – Craft meets culture",
        },
        FormField {
            label: "Emoji for USP 2",
            placeholder: "e.g., 🇺🇸",
        },
    ),
    (
        FormField {
            label: "USP 3",
            placeholder: "e.g., Women-owned & kosher certified – Coffee with conscience",
        },
        FormField {
            label: "Emoji for USP 3",
            placeholder: "e.g., 👩🏽‍🌾",
        },
    ),
    (
        FormField {
            label: "USP 4",
            placeholder: "e.g., A ritual for the soul – Your moment of stillness",
        },
        FormField {
            label: "Emoji for USP 4",
            placeholder: "e.g., 🧘🏽‍♀️",
        },
    ),
];

/// Terminal form backed by `dialoguer` prompts.
///
/// Prompts, hints and headings all go to stderr so stdout carries nothing
/// but generated captions.
pub struct CaptionForm {
    theme: ColorfulTheme,
    term: Term,
}

impl Default for CaptionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptionForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }

    /// Ask for every field, pre-filled with `previous`.
    pub fn collect(&self, previous: &CaptionRequest) -> Result<CaptionRequest> {
        let product_name = self.ask(PRODUCT_FIELD, &previous.product_name)?;
        let hook = self.ask(HOOK_FIELD, &previous.hook)?;
        let cta_keywords = self.ask(CTA_FIELD, &previous.cta_keywords)?;

        self.term
            .write_line("")
            .and_then(|_| self.term.write_line(&style("USPs and Emojis").bold().to_string()))
            .context("failed to write form heading")?;

        let mut usps: [Usp; USP_COUNT] = Default::default();
        for (slot, ((text_field, emoji_field), before)) in usps
            .iter_mut()
            .zip(USP_FIELDS.iter().zip(previous.usps.iter()))
        {
            let text = self.ask(*text_field, &before.text)?;
            let emoji = self.ask(*emoji_field, &before.emoji)?;
            *slot = Usp { text, emoji };
        }

        Ok(CaptionRequest {
            product_name,
            hook,
            cta_keywords,
            usps,
        })
    }

    /// The "Generate Captions" button.
    pub fn confirm_generate(&self) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Generate Captions?")
            .default(true)
            .interact_on(&self.term)
            .context("failed to read confirmation")
    }

    pub fn confirm_again(&self) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Edit the brief and generate again?")
            .default(false)
            .interact_on(&self.term)
            .context("failed to read confirmation")
    }

    fn ask(&self, field: FormField, initial: &str) -> Result<String> {
        self.term
            .write_line(&format!("  {}", style(field.placeholder).dim()))
            .with_context(|| format!("failed to write hint for `{}`", field.label))?;
        Input::<String>::with_theme(&self.theme)
            .with_prompt(field.label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .with_context(|| format!("failed to read `{}`", field.label))
    }
}
