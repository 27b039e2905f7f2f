use serde::{Deserialize, Serialize};

/// Number of USP/emoji pairs a caption carries.
pub const USP_COUNT: usize = 4;

/// One Unique Selling Point and the emoji that closes its bullet line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usp {
    pub text: String,
    pub emoji: String,
}

impl Usp {
    pub fn new(text: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emoji: emoji.into(),
        }
    }
}

/// Snapshot of the caption form at the moment generation is triggered.
///
/// Every field is free text and may be empty; nothing is validated. The
/// USPs keep the order in which they were entered. Fields missing from a
/// serialized brief load as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionRequest {
    pub product_name: String,
    pub hook: String,
    pub cta_keywords: String,
    pub usps: [Usp; USP_COUNT],
}

impl CaptionRequest {
    pub fn new(
        product_name: impl Into<String>,
        hook: impl Into<String>,
        cta_keywords: impl Into<String>,
        usps: [Usp; USP_COUNT],
    ) -> Self {
        Self {
            product_name: product_name.into(),
            hook: hook.into(),
            cta_keywords: cta_keywords.into(),
            usps,
        }
    }
}
