//! Facebook Messenger adapter.
//!
//! Messenger bot messages are archived in the Send API shape:
//!
//! ```json
//! {
//!   "attachment": {
//!     "type": "template",
//!     "payload": {
//!       "template_type": "button",
//!       "text": "Need help?",
//!       "buttons": [{"type": "web_url", "title": "Docs", "url": "https://docs.example.com"}]
//!     }
//!   },
//!   "dataPacket": {"type": "TEXT", "data": "..."}
//! }
//! ```
//!
//! Only `button` and `generic` templates are rendered. Every other
//! attachment becomes the literal `Unhandled`.

use serde::Deserialize;
use serde_json::Value;

use crate::channel::{Channel, ChannelAdapter};
use crate::packet::{Button, body_text, is_truthy, render_buttons, render_value, scalar_text};

use super::{UNHANDLED, lenient};

/// Raw Messenger bot message.
///
/// Scalar fields stay raw JSON and nested parts are read leniently, so a
/// mistyped field only blanks itself.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FacebookMessage {
    text: Value,
    #[serde(deserialize_with = "lenient::deserialize")]
    attachment: Option<Attachment>,
    #[serde(rename = "dataPacket")]
    data_packet: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Attachment {
    #[serde(rename = "type")]
    kind: Value,
    payload: Value,
}

/// `attachment.payload` of a template attachment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TemplatePayload {
    template_type: Value,
    title: Value,
    text: Value,
    #[serde(deserialize_with = "lenient::seq")]
    buttons: Vec<FacebookButton>,
    #[serde(deserialize_with = "lenient::seq")]
    elements: Vec<Element>,
}

/// One `generic` template element.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Element {
    title: Value,
    subtitle: Value,
    image_url: Value,
    #[serde(deserialize_with = "lenient::seq")]
    buttons: Vec<FacebookButton>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FacebookButton {
    title: Value,
    text: Value,
    url: Value,
}

/// Text of a field, `None` when it is missing or empty.
fn field(value: &Value) -> Option<String> {
    Some(scalar_text(Some(value))).filter(|text| !text.is_empty())
}

impl From<&FacebookButton> for Button {
    fn from(button: &FacebookButton) -> Self {
        let label = field(&button.title).or_else(|| field(&button.text));
        match (label, field(&button.url)) {
            (Some(label), Some(url)) => Button::new(label).with_url(url),
            (Some(label), None) => Button::new(label),
            (None, _) => Button::default(),
        }
    }
}

fn buttons(buttons: &[FacebookButton]) -> String {
    let buttons: Vec<Button> = buttons.iter().map(Button::from).collect();
    render_buttons(&buttons)
}

/// Adapter for Facebook Messenger transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacebookAdapter;

impl FacebookAdapter {
    /// Creates a new Facebook Messenger adapter.
    pub fn new() -> Self {
        Self
    }

    fn render_attachment(attachment: &Attachment) -> String {
        if attachment.kind.as_str() != Some("template") {
            tracing::debug!(kind = ?attachment.kind, "unhandled messenger attachment");
            return UNHANDLED.to_string();
        }
        match TemplatePayload::deserialize(&attachment.payload) {
            Ok(template) => Self::render_template(&template),
            Err(err) => {
                tracing::debug!("malformed messenger template: {err}");
                UNHANDLED.to_string()
            }
        }
    }

    fn render_template(template: &TemplatePayload) -> String {
        match template.template_type.as_str() {
            Some("button") => Self::render_button_template(template),
            Some("generic") => Self::render_generic_template(template),
            other => {
                tracing::debug!(template_type = ?other, "unhandled messenger template");
                UNHANDLED.to_string()
            }
        }
    }

    fn render_button_template(template: &TemplatePayload) -> String {
        match (field(&template.title), field(&template.text)) {
            (Some(title), _) => format!("{title}\n{}", buttons(&template.buttons)),
            (None, Some(text)) => format!("\n{text}{}", buttons(&template.buttons)),
            (None, None) => String::new(),
        }
    }

    fn render_generic_template(template: &TemplatePayload) -> String {
        let mut out = String::new();
        for element in &template.elements {
            out.push('\n');
            out.push_str(&scalar_text(Some(&element.title)));
            for line in [field(&element.subtitle), field(&element.image_url)]
                .into_iter()
                .flatten()
            {
                out.push('\n');
                out.push_str(&line);
            }
            out.push_str(&buttons(&element.buttons));
            out.push('\n');
        }
        out
    }
}

impl ChannelAdapter for FacebookAdapter {
    fn name(&self) -> &'static str {
        "Facebook"
    }

    fn channel(&self) -> Channel {
        Channel::Facebook
    }

    fn render_bot(&self, payload: &Value) -> String {
        let message = match FacebookMessage::deserialize(payload) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!("bot payload is not a messenger message: {err}");
                return format!("\n{}", body_text(payload));
            }
        };

        let packet = Some(&message.data_packet).filter(|p| is_truthy(p));
        let attachment = message.attachment.as_ref().filter(|a| is_truthy(&a.kind));

        match (attachment, packet) {
            (Some(attachment), Some(packet)) => {
                Self::render_attachment(attachment) + &render_value(packet)
            }
            (Some(attachment), None) => Self::render_attachment(attachment),
            (None, Some(packet)) => render_value(packet),
            (None, None) => format!("\n{}", body_text(&message.text)),
        }
    }
}
