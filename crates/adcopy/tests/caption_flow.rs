use std::{future::Future, pin::Pin};

use adcopy::{
    CaptionGenerator, Settings,
    config::{API_KEY_VAR, BASE_URL_VAR},
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    present::render_result,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    types::{
        CaptionRequest, CaptionResult, Usp,
        fragments::{
            BRAND_MARKER, CTA_MARKER, HOOK_MARKER, USP_BULLET, USPS_MARKER, build_prompt,
        },
    },
};

/// Replies with a fixed assistant message.
struct CannedReply(&'static str);

impl ChatCompletionProvider for CannedReply {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        _params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let text = self.0;
        Box::pin(async move {
            Ok(GenericChatCompletionResponse {
                content: GenericMessage::new(text.to_owned(), GenericRole::Assistant),
                usage: None,
            })
        })
    }
}

fn coffee_brief() -> CaptionRequest {
    CaptionRequest::new(
        "Paul John Caffeine",
        "Taste the richness ☕",
        "brew bold",
        [
            Usp::new("Shade-grown in India", "🌿"),
            Usp::new("Freshly roasted in the U.S.", "🇺🇸"),
            Usp::new("Women-owned & kosher certified", "👩🏽‍🌾"),
            Usp::new("A ritual for the soul", "🧘🏽‍♀️"),
        ],
    )
}

#[test]
fn prompt_lists_every_field_in_order_with_all_markers() {
    let prompt = build_prompt(&coffee_brief());

    for marker in [HOOK_MARKER, BRAND_MARKER, USPS_MARKER, USP_BULLET, CTA_MARKER] {
        assert!(prompt.contains(marker), "missing marker {marker}");
    }

    let ordered = [
        "Paul John Caffeine",
        "Shade-grown in India 🌿",
        "Freshly roasted in the U.S. 🇺🇸",
        "Women-owned & kosher certified 👩🏽‍🌾",
        "A ritual for the soul 🧘🏽‍♀️",
        "Taste the richness ☕",
        "brew bold",
    ];
    let positions: Vec<usize> = ordered
        .iter()
        .map(|value| {
            prompt
                .find(value)
                .unwrap_or_else(|| panic!("`{value}` missing from prompt"))
        })
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "fields out of order: {positions:?}"
    );
}

#[tokio::test]
async fn stubbed_reply_is_displayed_trimmed() {
    let generator = CaptionGenerator::new(CannedReply("  Line A\n✅ B 🌿\n..."));

    let result = generator.generate(&coffee_brief()).await;
    assert_eq!(result, CaptionResult::GeneratedText("Line A\n✅ B 🌿\n...".into()));

    let mut out = Vec::new();
    render_result(&result, &mut out).unwrap();
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.ends_with("\nLine A\n✅ B 🌿\n...\n"));
}

#[tokio::test]
async fn network_failure_is_reported_not_raised() {
    let settings = Settings::from_lookup(|key| match key {
        API_KEY_VAR => Some("sk-test".into()),
        BASE_URL_VAR => Some("http://127.0.0.1:1/v1".into()),
        _ => None,
    })
    .unwrap();
    let generator = CaptionGenerator::new(settings.backend().unwrap());

    let result = generator.generate(&CaptionRequest::default()).await;

    let CaptionResult::GenerationError { message } = &result else {
        panic!("expected a generation error, got {result:?}");
    };
    assert!(!message.trim().is_empty());

    let mut out = Vec::new();
    render_result(&result, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Error generating captions: "));
}
