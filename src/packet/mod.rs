//! Data packets: the structured content bots send inside a turn.
//!
//! A data packet is a tagged JSON node, `{"type": "<TAG>", "data": <payload>}`,
//! and composite packets (cards, card groups, option lists, forms) nest
//! further packets. This module turns that open-ended JSON into the closed
//! [`ContentNode`] sum type; [`render`] turns a node into transcript text.
//!
//! Conversion is total. A node with an unknown tag, a missing `type`, or a
//! payload that is not even an object becomes [`ContentNode::Unrecognized`]
//! and keeps its raw JSON so the renderer can fall back on it. Missing fields
//! are read as empty strings or empty lists.
//!
//! # Example
//!
//! ```
//! use chatscribe::packet::{ContentNode, Family};
//! use serde_json::json;
//!
//! let node = ContentNode::from_value(&json!({
//!     "type": "CARD_TYPE1",
//!     "data": {
//!         "SECTIONS": [{"type": "HEADER1", "data": {"TEXT": "Plans"}}],
//!         "BUTTONS": [{"optionData": {"label": "Compare"}}]
//!     }
//! }));
//! assert_eq!(node.family(), Some(Family::Composite));
//! assert_eq!(node.tag(), Some("CARD_TYPE1"));
//! ```

pub mod render;

pub use render::{
    COMPOSITE_PLACEHOLDER, PRIMITIVE_PLACEHOLDER, render, render_buttons, render_composite,
    render_primitive, render_value,
};

use serde_json::Value;

/// Tags rendered directly to text.
pub const PRIMITIVE_TAGS: &[&str] = &[
    "TEXT",
    "HEADER1",
    "HEADER2",
    "HEADER3",
    "HEADER4",
    "HEADER5",
    "HEADER6",
    "PARA1",
    "PARA2",
    "PARA3",
    "PARA4",
    "PARA5",
    "PARA6",
    "FOOTER1",
    "FOOTER2",
    "FOOTER3",
    "HSEPERETOR",
    "HSEPARATOR",
    "VSEPERETOR",
    "CALL",
    "L1_AGENT",
    "IMAGE_TYPE1",
    "HORZ_IMAGES_TYPE1",
    "VERT_IMAGES_TYPE1",
    "POSTAL_ADDRESS",
    "ADDRESS",
    "TABLE",
    "HYPERLINK",
    "SENSE",
    "SENSE_SUGGESTION",
    "IMAGE_ARRAY",
    "VIDEO",
    "AUDIO",
    "PIE_CHART",
    "STACKED_BAR_CHART",
    "BAR_CHART",
    "LINE_CHART",
    "PHOTO",
    "SINGLE_OPTION",
    "VOICE",
];

/// Tags whose rendering recurses into child packets.
pub const COMPOSITE_TAGS: &[&str] = &[
    "CARD_TYPE1",
    "HORZ_CARDS_TYPE1",
    "VERT_CARDS_TYPE1",
    "OPTIONS",
    "FORM",
    "FILLED_FORM",
];

const HEADER_TAGS: &[&str] = &[
    "HEADER1", "HEADER2", "HEADER3", "HEADER4", "HEADER5", "HEADER6",
];
const PARA_TAGS: &[&str] = &["PARA1", "PARA2", "PARA3", "PARA4", "PARA5", "PARA6"];
const FOOTER_TAGS: &[&str] = &["FOOTER1", "FOOTER2", "FOOTER3"];

/// Which dispatch table a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Leaf content.
    Primitive,
    /// Container content.
    Composite,
}

impl Family {
    /// Looks a tag up in the dispatch tables, primitive first.
    pub fn of(tag: &str) -> Option<Family> {
        if PRIMITIVE_TAGS.contains(&tag) {
            Some(Family::Primitive)
        } else if COMPOSITE_TAGS.contains(&tag) {
            Some(Family::Composite)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    StackedBar,
    Bar,
    Line,
}

/// Payload of `ADDRESS` / `POSTAL_ADDRESS`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostalAddress {
    pub door_no: String,
    pub building: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// One entry of an `IMAGE_ARRAY`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageEntry {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// A clickable option attached to a card, option list or template.
///
/// Rendered as `[[label]]`, followed by `url>>` on its own line when the
/// button opens a link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Button {
    pub label: String,
    pub url: Option<String>,
}

impl Button {
    /// Creates a button without a link.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }

    /// Attaches a link to the button.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Reads a data-packet button, `{"optionData": {"label": ..., "url": ...}}`.
    ///
    /// A button without the `optionData` wrapper is read from its top level.
    pub fn from_value(value: &Value) -> Self {
        let option = value.get("optionData").unwrap_or(value);
        Self {
            label: text_at(option, "label"),
            url: non_empty_str(option.get("url")),
        }
    }
}

/// `CARD_TYPE1` payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub sections: Vec<ContentNode>,
    pub buttons: Vec<Button>,
}

/// `HORZ_CARDS_TYPE1` / `VERT_CARDS_TYPE1` payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardGroup {
    pub title: String,
    pub description: String,
    pub cards: Vec<ContentNode>,
    pub sections: Vec<ContentNode>,
    pub buttons: Vec<Button>,
}

/// `OPTIONS` payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionList {
    pub packet: Option<Box<ContentNode>>,
    pub options: Vec<Button>,
}

/// One node of a data packet tree.
///
/// Each recognized tag has its own variant; [`ContentNode::Unrecognized`]
/// carries everything else along with its raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Text(String),
    Header { level: u8, text: String },
    Paragraph { level: u8, text: String },
    Footer { level: u8, text: String },
    Separator(Orientation),
    Call { text: String },
    AgentLabel { text: String },
    Image { url: String },
    ImageGroup { orientation: Orientation, images: Vec<String> },
    Address { postal: bool, address: PostalAddress },
    Table { rows: Vec<Vec<ContentNode>> },
    Hyperlink { label: String },
    Sense { suggestion: bool, title: String },
    ImageArray(Vec<ImageEntry>),
    Media { kind: MediaKind, title: String, description: String },
    Chart { kind: ChartKind, title: String, description: String },
    Photo,
    Voice,
    SingleOption { label: String, value: String },
    Form { title: String },
    Card(Card),
    CardGroup { orientation: Orientation, group: CardGroup },
    Options(OptionList),
    FilledForm { fields: Vec<ContentNode> },
    Unrecognized { tag: Option<String>, raw: Value },
}

impl ContentNode {
    /// Builds a node from archived JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(tag) = value.get("type").and_then(Value::as_str) else {
            return ContentNode::Unrecognized {
                tag: None,
                raw: value.clone(),
            };
        };
        let data = value.get("data").unwrap_or(&Value::Null);

        match tag {
            "TEXT" => ContentNode::Text(scalar_text(Some(data))),
            "HEADER1" | "HEADER2" | "HEADER3" | "HEADER4" | "HEADER5" | "HEADER6" => {
                ContentNode::Header {
                    level: trailing_level(tag),
                    text: text_at(data, "TEXT"),
                }
            }
            "PARA1" | "PARA2" | "PARA3" | "PARA4" | "PARA5" | "PARA6" => ContentNode::Paragraph {
                level: trailing_level(tag),
                text: text_at(data, "TEXT"),
            },
            "FOOTER1" | "FOOTER2" | "FOOTER3" => ContentNode::Footer {
                level: trailing_level(tag),
                text: text_at(data, "TEXT"),
            },
            "HSEPERETOR" | "HSEPARATOR" => ContentNode::Separator(Orientation::Horizontal),
            "VSEPERETOR" => ContentNode::Separator(Orientation::Vertical),
            "CALL" => ContentNode::Call {
                text: text_at(data, "TEXT"),
            },
            "L1_AGENT" => ContentNode::AgentLabel {
                text: text_at(data, "text"),
            },
            "IMAGE_TYPE1" => ContentNode::Image {
                url: text_at(data, "IMAGE"),
            },
            "HORZ_IMAGES_TYPE1" => ContentNode::ImageGroup {
                orientation: Orientation::Horizontal,
                images: strings(data.get("IMAGES")),
            },
            "VERT_IMAGES_TYPE1" => ContentNode::ImageGroup {
                orientation: Orientation::Vertical,
                images: strings(data.get("IMAGES")),
            },
            "POSTAL_ADDRESS" | "ADDRESS" => ContentNode::Address {
                postal: tag == "POSTAL_ADDRESS",
                address: PostalAddress {
                    door_no: text_at(data, "doorNo"),
                    building: text_at(data, "building"),
                    locality: text_at(data, "locality"),
                    city: text_at(data, "city"),
                    state: text_at(data, "state"),
                    country: text_at(data, "country"),
                },
            },
            "TABLE" => ContentNode::Table {
                rows: list(data.get("ROWS")).iter().map(table_row).collect(),
            },
            "HYPERLINK" => ContentNode::Hyperlink {
                label: text_at(data, "LABEL"),
            },
            "SENSE" | "SENSE_SUGGESTION" => ContentNode::Sense {
                suggestion: tag == "SENSE_SUGGESTION",
                title: text_at(data, "title"),
            },
            "IMAGE_ARRAY" => ContentNode::ImageArray(image_entries(data)),
            "VIDEO" | "AUDIO" => ContentNode::Media {
                kind: if tag == "VIDEO" {
                    MediaKind::Video
                } else {
                    MediaKind::Audio
                },
                title: text_at(data, "title"),
                description: text_at(data, "description"),
            },
            "PIE_CHART" | "STACKED_BAR_CHART" | "BAR_CHART" | "LINE_CHART" => ContentNode::Chart {
                kind: match tag {
                    "PIE_CHART" => ChartKind::Pie,
                    "STACKED_BAR_CHART" => ChartKind::StackedBar,
                    "BAR_CHART" => ChartKind::Bar,
                    _ => ChartKind::Line,
                },
                title: text_at(data, "TITLE"),
                description: text_at(data, "DESCRIPTION"),
            },
            "PHOTO" => ContentNode::Photo,
            "VOICE" => ContentNode::Voice,
            "SINGLE_OPTION" => {
                // Older exports put LABEL/VALUE beside `type` instead of under `data`.
                let source = if data.get("LABEL").is_some() || data.get("VALUE").is_some() {
                    data
                } else {
                    value
                };
                ContentNode::SingleOption {
                    label: text_at(source, "LABEL"),
                    value: text_at(source, "VALUE"),
                }
            }
            "FORM" => ContentNode::Form {
                title: text_at(data, "TITLE"),
            },
            "CARD_TYPE1" => ContentNode::Card(Card {
                sections: nodes(data.get("SECTIONS")),
                buttons: buttons(data.get("BUTTONS")),
            }),
            "HORZ_CARDS_TYPE1" | "VERT_CARDS_TYPE1" => ContentNode::CardGroup {
                orientation: if tag == "HORZ_CARDS_TYPE1" {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                },
                group: CardGroup {
                    title: text_at(data, "TITLE"),
                    description: text_at(data, "DESCRIPTION"),
                    cards: nodes(data.get("CARDS")),
                    sections: nodes(data.get("SECTIONS")),
                    buttons: buttons(data.get("BUTTONS")),
                },
            },
            "OPTIONS" => ContentNode::Options(OptionList {
                packet: data
                    .get("PACKET")
                    .filter(|packet| is_truthy(packet))
                    .map(|packet| Box::new(ContentNode::from_value(packet))),
                options: buttons(data.get("OPTIONS")),
            }),
            "FILLED_FORM" => ContentNode::FilledForm {
                fields: nodes(data.get("FIELDS")),
            },
            _ => ContentNode::Unrecognized {
                tag: Some(tag.to_string()),
                raw: value.clone(),
            },
        }
    }

    /// Returns the archived tag of this node.
    pub fn tag(&self) -> Option<&str> {
        let tag = match self {
            ContentNode::Text(_) => "TEXT",
            ContentNode::Header { level, .. } => level_tag(HEADER_TAGS, *level),
            ContentNode::Paragraph { level, .. } => level_tag(PARA_TAGS, *level),
            ContentNode::Footer { level, .. } => level_tag(FOOTER_TAGS, *level),
            ContentNode::Separator(Orientation::Horizontal) => "HSEPERETOR",
            ContentNode::Separator(Orientation::Vertical) => "VSEPERETOR",
            ContentNode::Call { .. } => "CALL",
            ContentNode::AgentLabel { .. } => "L1_AGENT",
            ContentNode::Image { .. } => "IMAGE_TYPE1",
            ContentNode::ImageGroup {
                orientation: Orientation::Horizontal,
                ..
            } => "HORZ_IMAGES_TYPE1",
            ContentNode::ImageGroup {
                orientation: Orientation::Vertical,
                ..
            } => "VERT_IMAGES_TYPE1",
            ContentNode::Address { postal: true, .. } => "POSTAL_ADDRESS",
            ContentNode::Address { postal: false, .. } => "ADDRESS",
            ContentNode::Table { .. } => "TABLE",
            ContentNode::Hyperlink { .. } => "HYPERLINK",
            ContentNode::Sense {
                suggestion: false, ..
            } => "SENSE",
            ContentNode::Sense {
                suggestion: true, ..
            } => "SENSE_SUGGESTION",
            ContentNode::ImageArray(_) => "IMAGE_ARRAY",
            ContentNode::Media {
                kind: MediaKind::Video,
                ..
            } => "VIDEO",
            ContentNode::Media {
                kind: MediaKind::Audio,
                ..
            } => "AUDIO",
            ContentNode::Chart { kind, .. } => match kind {
                ChartKind::Pie => "PIE_CHART",
                ChartKind::StackedBar => "STACKED_BAR_CHART",
                ChartKind::Bar => "BAR_CHART",
                ChartKind::Line => "LINE_CHART",
            },
            ContentNode::Photo => "PHOTO",
            ContentNode::Voice => "VOICE",
            ContentNode::SingleOption { .. } => "SINGLE_OPTION",
            ContentNode::Form { .. } => "FORM",
            ContentNode::Card(_) => "CARD_TYPE1",
            ContentNode::CardGroup {
                orientation: Orientation::Horizontal,
                ..
            } => "HORZ_CARDS_TYPE1",
            ContentNode::CardGroup {
                orientation: Orientation::Vertical,
                ..
            } => "VERT_CARDS_TYPE1",
            ContentNode::Options(_) => "OPTIONS",
            ContentNode::FilledForm { .. } => "FILLED_FORM",
            ContentNode::Unrecognized { tag, .. } => return tag.as_deref(),
        };
        Some(tag)
    }

    /// Returns the dispatch family, `None` for unrecognized nodes.
    pub fn family(&self) -> Option<Family> {
        match self {
            ContentNode::Unrecognized { .. } => None,
            ContentNode::Form { .. }
            | ContentNode::Card(_)
            | ContentNode::CardGroup { .. }
            | ContentNode::Options(_)
            | ContentNode::FilledForm { .. } => Some(Family::Composite),
            _ => Some(Family::Primitive),
        }
    }
}

impl From<&Value> for ContentNode {
    fn from(value: &Value) -> Self {
        ContentNode::from_value(value)
    }
}

// ============================================================================
// JSON helpers
// ============================================================================

/// String form of a scalar JSON value.
///
/// Strings are taken verbatim, numbers and booleans are formatted, `null` or
/// a missing value is empty, and arrays/objects fall back to compact JSON.
pub(crate) fn scalar_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Reads the text of a plain message payload: the `text` field of an
/// object, or the payload itself.
pub(crate) fn body_text(value: &Value) -> String {
    match value {
        Value::Object(map) => scalar_text(map.get("text")),
        other => scalar_text(Some(other)),
    }
}

/// Reads `value[key]` as text.
pub(crate) fn text_at(value: &Value, key: &str) -> String {
    scalar_text(value.get(key))
}

/// Reads an optional string, treating `""` as absent.
pub(crate) fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Loose truthiness used by the archived payloads for optional parts.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn list(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn strings(value: Option<&Value>) -> Vec<String> {
    list(value).iter().map(|v| scalar_text(Some(v))).collect()
}

fn nodes(value: Option<&Value>) -> Vec<ContentNode> {
    list(value).iter().map(ContentNode::from_value).collect()
}

fn buttons(value: Option<&Value>) -> Vec<Button> {
    list(value).iter().map(Button::from_value).collect()
}

fn table_row(row: &Value) -> Vec<ContentNode> {
    if let Some(cells) = row.as_array() {
        return cells.iter().map(ContentNode::from_value).collect();
    }
    let cells = row
        .get("data")
        .and_then(|data| data.get("CELLS"))
        .or_else(|| row.get("CELLS"));
    nodes(cells)
}

fn image_entries(data: &Value) -> Vec<ImageEntry> {
    let entries: Vec<&Value> = match data {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => Vec::new(),
    };
    entries
        .into_iter()
        .map(|entry| {
            let fields = entry.get("data").unwrap_or(entry);
            ImageEntry {
                title: text_at(fields, "title"),
                url: text_at(fields, "url"),
                description: text_at(fields, "description"),
            }
        })
        .collect()
}

fn trailing_level(tag: &str) -> u8 {
    tag.bytes()
        .last()
        .filter(u8::is_ascii_digit)
        .map_or(1, |digit| digit - b'0')
}

fn level_tag(tags: &'static [&'static str], level: u8) -> &'static str {
    let index = usize::from(level.saturating_sub(1));
    tags.get(index).copied().unwrap_or(tags[0])
}
