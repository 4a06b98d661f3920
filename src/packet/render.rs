//! Data packet renderer.
//!
//! Two mutually recursive dispatchers turn a [`ContentNode`] into a transcript
//! fragment:
//!
//! - [`render_primitive`] handles leaf nodes and renders anything else as
//!   [`PRIMITIVE_PLACEHOLDER`].
//! - [`render_composite`] handles container nodes and renders anything else
//!   as [`COMPOSITE_PLACEHOLDER`].
//!
//! [`render`] is the entry point for a whole bot payload: it picks the
//! dispatcher from the node's family and, for unrecognized nodes, prints the
//! raw value on a new line.
//!
//! Every fragment carries its own leading newline (or none); nothing is
//! inserted between fragments. The exact spacing below is what transcript
//! consumers parse, so it must not be normalized.
//!
//! # Example
//!
//! ```
//! use chatscribe::packet::render_value;
//! use serde_json::json;
//!
//! let text = render_value(&json!({
//!     "type": "OPTIONS",
//!     "data": {
//!         "PACKET": {"type": "PARA1", "data": {"TEXT": "Pick one"}},
//!         "OPTIONS": [{"optionData": {"label": "Yes"}}, {"optionData": {"label": "No"}}]
//!     }
//! }));
//! assert_eq!(text, "\n \nPick one\n[[Yes]]\n[[No]]");
//! ```

use serde_json::Value;

use super::{Button, Card, CardGroup, ContentNode, Family, OptionList, scalar_text};

/// Rendered for a node the primitive dispatcher does not handle.
pub const PRIMITIVE_PLACEHOLDER: &str = "Unhandled FROM DATAPACKET";

/// Rendered for a node the composite dispatcher does not handle.
pub const COMPOSITE_PLACEHOLDER: &str = "Unhandled non Datapacket";

/// Renders a bot payload.
///
/// Primitive nodes go to [`render_primitive`], composite nodes to
/// [`render_composite`]. Anything else renders as its raw value on a new
/// line: a JSON string verbatim, any other value as compact JSON.
pub fn render(node: &ContentNode) -> String {
    match node.family() {
        Some(Family::Primitive) => render_primitive(node),
        Some(Family::Composite) => render_composite(node),
        None => {
            let raw = match node {
                ContentNode::Unrecognized { raw, .. } => scalar_text(Some(raw)),
                _ => String::new(),
            };
            tracing::debug!(tag = ?node.tag(), "rendering unrecognized data packet verbatim");
            format!("\n{raw}")
        }
    }
}

/// Parses and renders a raw JSON bot payload.
pub fn render_value(value: &Value) -> String {
    render(&ContentNode::from_value(value))
}

/// Renders a leaf node.
pub fn render_primitive(node: &ContentNode) -> String {
    match node {
        ContentNode::Text(text) => format!("\n{text}"),
        ContentNode::Header { text, .. }
        | ContentNode::Paragraph { text, .. }
        | ContentNode::Footer { text, .. }
        | ContentNode::AgentLabel { text } => format!("\n{text}"),
        ContentNode::Separator(_) => String::new(),
        ContentNode::Call { text } => format!("\n{text}Call Now"),
        ContentNode::Image { url } => format!("\n{url}"),
        ContentNode::ImageGroup { images, .. } => {
            images.iter().map(|url| format!("\n {url}")).collect()
        }
        ContentNode::Address { address, .. } => format!(
            "\n Door no {} \n Building {} \n Locality {} \n City {} \n State {} \n Country {}",
            address.door_no,
            address.building,
            address.locality,
            address.city,
            address.state,
            address.country
        ),
        ContentNode::Table { rows } => rows.iter().flatten().map(render_primitive).collect(),
        ContentNode::Hyperlink { label } => format!("\n {label}"),
        ContentNode::Sense { title, .. } => format!("\n {title}Views"),
        ContentNode::ImageArray(entries) => entries
            .iter()
            .map(|entry| {
                format!(
                    "\n {}\n {}\n {}",
                    entry.title, entry.url, entry.description
                )
            })
            .collect(),
        ContentNode::Media {
            title, description, ..
        } => format!("\n{title}audio/video not supported\n {description}"),
        ContentNode::Chart {
            title, description, ..
        } => format!("\n {title}\n {description}\n<[[Chart]]"),
        ContentNode::Photo => "Photo Uploaded".to_string(),
        ContentNode::Voice => "Voice Uploaded".to_string(),
        ContentNode::SingleOption { label, value } => format!("\n {label}\n {value}"),
        ContentNode::Form { title } => render_form(title),
        ContentNode::Card(_)
        | ContentNode::CardGroup { .. }
        | ContentNode::Options(_)
        | ContentNode::FilledForm { .. }
        | ContentNode::Unrecognized { .. } => {
            tracing::debug!(tag = ?node.tag(), "no primitive rendering for data packet");
            PRIMITIVE_PLACEHOLDER.to_string()
        }
    }
}

/// Renders a container node, recursing into its children.
pub fn render_composite(node: &ContentNode) -> String {
    match node {
        ContentNode::Card(card) => render_card(card),
        ContentNode::CardGroup { group, .. } => render_card_group(group),
        ContentNode::Options(options) => render_options(options),
        ContentNode::Form { title } => render_form(title),
        ContentNode::FilledForm { fields } => fields
            .iter()
            .map(|field| format!("\n {}", render_primitive(field)))
            .collect(),
        _ => {
            tracing::debug!(tag = ?node.tag(), "no composite rendering for data packet");
            COMPOSITE_PLACEHOLDER.to_string()
        }
    }
}

/// Renders buttons as `\n[[label]]`, adding `\n{url}>>` for link buttons.
pub fn render_buttons(buttons: &[Button]) -> String {
    let mut out = String::new();
    for button in buttons {
        out.push_str("\n[[");
        out.push_str(&button.label);
        out.push_str("]]");
        if let Some(url) = &button.url {
            out.push('\n');
            out.push_str(url);
            out.push_str(">>");
        }
    }
    out
}

fn render_card(card: &Card) -> String {
    let mut out: String = card.sections.iter().map(render_primitive).collect();
    out.push_str(&render_buttons(&card.buttons));
    out
}

fn render_card_group(group: &CardGroup) -> String {
    let mut out = format!("\n{}\n{}", group.title, group.description);
    for card in &group.cards {
        out.push('\n');
        out.push_str(&render_composite(card));
    }
    for section in &group.sections {
        out.push_str("\n ");
        out.push_str(&render_primitive(section));
    }
    out.push_str(&render_buttons(&group.buttons));
    out
}

fn render_options(options: &OptionList) -> String {
    let mut out = String::new();
    if let Some(packet) = &options.packet {
        out.push_str("\n ");
        out.push_str(&render_primitive(packet));
    }
    out.push_str(&render_buttons(&options.options));
    out
}

fn render_form(title: &str) -> String {
    format!("\n {title}\n Fill Form")
}
