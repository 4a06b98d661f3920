//! Google Business Messages adapter.
//!
//! Bot messages are either plain text with suggestion chips or a rich card:
//!
//! ```json
//! {
//!   "richCard": {
//!     "standaloneCard": {
//!       "cardContent": {
//!         "title": "Offer",
//!         "media": {"contentInfo": {"fileUrl": "https://img/offer.png"}},
//!         "suggestions": [{"reply": {"text": "Tell me more"}}]
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Rich cards are only partially supported, so their rendering always ends
//! with the literal `Unhandled`.

use serde::Deserialize;
use serde_json::Value;

use crate::channel::{Channel, ChannelAdapter};
use crate::packet::{body_text, is_truthy, render_value, scalar_text};

use super::{UNHANDLED, lenient};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GoogleMessage {
    text: Value,
    #[serde(deserialize_with = "lenient::deserialize")]
    rich_card: Option<RichCard>,
    #[serde(deserialize_with = "lenient::seq")]
    suggestions: Vec<Suggestion>,
    data_packet: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RichCard {
    #[serde(deserialize_with = "lenient::deserialize")]
    standalone_card: Option<StandaloneCard>,
    #[serde(deserialize_with = "lenient::deserialize")]
    carousel_card: Option<CarouselCard>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StandaloneCard {
    #[serde(deserialize_with = "lenient::deserialize")]
    card_content: CardContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CarouselCard {
    #[serde(deserialize_with = "lenient::seq")]
    card_contents: Vec<CardContent>,
}

/// Scalar fields stay raw JSON so a number or boolean still renders.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CardContent {
    title: Value,
    description: Value,
    #[serde(deserialize_with = "lenient::deserialize")]
    media: Option<Media>,
    #[serde(deserialize_with = "lenient::seq")]
    suggestions: Vec<Suggestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Media {
    #[serde(deserialize_with = "lenient::deserialize")]
    content_info: ContentInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ContentInfo {
    file_url: Value,
}

/// A suggestion chip: a quick reply or an action.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Suggestion {
    #[serde(deserialize_with = "lenient::deserialize")]
    reply: Option<SuggestionText>,
    #[serde(deserialize_with = "lenient::deserialize")]
    action: Option<SuggestionText>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SuggestionText {
    text: Value,
}

impl Suggestion {
    /// The reply text, else the action text.
    fn label(&self) -> String {
        self.reply
            .as_ref()
            .or(self.action.as_ref())
            .map(|chip| scalar_text(Some(&chip.text)))
            .unwrap_or_default()
    }
}

fn push_line(out: &mut String, value: &Value) {
    let value = scalar_text(Some(value));
    if !value.is_empty() {
        out.push('\n');
        out.push_str(&value);
    }
}

fn push_suggestions(out: &mut String, suggestions: &[Suggestion]) {
    for suggestion in suggestions {
        out.push_str("\n[[");
        out.push_str(&suggestion.label());
        out.push_str("]]");
    }
}

fn push_card(out: &mut String, card: &CardContent) {
    if let Some(media) = &card.media {
        push_line(out, &media.content_info.file_url);
    }
    push_line(out, &card.title);
    push_line(out, &card.description);
    push_suggestions(out, &card.suggestions);
}

/// Adapter for Google Business Messages transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleMessagesAdapter;

impl GoogleMessagesAdapter {
    /// Creates a new Google Business Messages adapter.
    pub fn new() -> Self {
        Self
    }

    fn render_rich(message: &GoogleMessage) -> String {
        let mut out = String::new();
        let Some(rich_card) = &message.rich_card else {
            out.push_str(&scalar_text(Some(&message.text)));
            push_suggestions(&mut out, &message.suggestions);
            return out;
        };

        if let Some(standalone) = &rich_card.standalone_card {
            push_card(&mut out, &standalone.card_content);
        } else if let Some(carousel) = &rich_card.carousel_card {
            for card in &carousel.card_contents {
                push_card(&mut out, card);
            }
        }
        out.push_str(UNHANDLED);
        out
    }
}

impl ChannelAdapter for GoogleMessagesAdapter {
    fn name(&self) -> &'static str {
        "Google Messages"
    }

    fn channel(&self) -> Channel {
        Channel::GoogleMessages
    }

    fn render_bot(&self, payload: &Value) -> String {
        let message = match GoogleMessage::deserialize(payload) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!("bot payload is not a business message: {err}");
                return format!("\n{}", body_text(payload));
            }
        };

        if is_truthy(&message.data_packet) {
            return Self::render_rich(&message) + &render_value(&message.data_packet);
        }
        if message.rich_card.is_some() || !message.suggestions.is_empty() {
            return Self::render_rich(&message);
        }
        format!("\n{}", scalar_text(Some(&message.text)))
    }
}
