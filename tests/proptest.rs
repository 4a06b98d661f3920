//! Property-based tests for chatscribe.
//!
//! These tests generate random payloads and transcripts to check that
//! rendering is total, deterministic and order preserving.

use proptest::prelude::*;
use serde_json::{Map, Value, json};

use chatscribe::channel::{Channel, create_adapter, render_chat_history};
use chatscribe::packet::{ContentNode, render, render_value};
use chatscribe::turn::Turn;

/// Tags drawn from the known set plus a few unknown ones.
fn arb_tag() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "TEXT", "HEADER1", "PARA2", "FOOTER3", "HSEPERETOR", "CALL", "IMAGE_TYPE1",
        "HORZ_IMAGES_TYPE1", "ADDRESS", "TABLE", "HYPERLINK", "SENSE", "IMAGE_ARRAY",
        "VIDEO", "PIE_CHART", "PHOTO", "VOICE", "SINGLE_OPTION", "FORM", "CARD_TYPE1",
        "HORZ_CARDS_TYPE1", "OPTIONS", "FILLED_FORM", "CAROUSEL", "SPARKLINE", "text",
    ])
    .prop_map(ToString::to_string)
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Привет мир".to_string(),
        String::new(),
        "Special;chars\"here\nnewline".to_string(),
        "🎉 emoji".to_string(),
        "[[brackets]]".to_string(),
    ])
}

/// Arbitrary JSON, nested a few levels deep.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        arb_text().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop::sample::select(vec![
                        "TEXT", "SECTIONS", "BUTTONS", "CARDS", "OPTIONS", "PACKET", "ROWS",
                        "label", "url", "title",
                    ]),
                    inner
                ),
                0..4
            )
            .prop_map(|entries| {
                let map: Map<String, Value> = entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect();
                Value::Object(map)
            }),
        ]
    })
}

/// A tagged data packet with arbitrary payload.
fn arb_packet() -> impl Strategy<Value = Value> {
    (arb_tag(), arb_json()).prop_map(|(tag, data)| json!({"type": tag, "data": data}))
}

fn arb_turn() -> impl Strategy<Value = Turn> {
    prop_oneof![
        arb_text().prop_map(Turn::user),
        arb_packet().prop_map(Turn::bot),
        (arb_text(), arb_text()).prop_map(|(name, text)| Turn::agent(name, text)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================
    // RENDERER PROPERTIES
    // ============================================

    /// Rendering never panics, whatever the payload shape
    #[test]
    fn render_is_total(payload in arb_json()) {
        let _ = render_value(&payload);
    }

    /// Known and unknown tags with arbitrary data always render
    #[test]
    fn packets_always_render(packet in arb_packet()) {
        let _ = render_value(&packet);
    }

    /// Same input, same output
    #[test]
    fn render_is_deterministic(packet in arb_packet()) {
        let node = ContentNode::from_value(&packet);
        prop_assert_eq!(render(&node), render(&node));
        prop_assert_eq!(render_value(&packet), render_value(&packet.clone()));
    }

    /// Table cells render in row-major order
    #[test]
    fn table_preserves_cell_order(rows in prop::collection::vec(prop::collection::vec("[a-z]{1,6}", 0..4), 0..4)) {
        let data: Vec<Vec<Value>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| json!({"type": "TEXT", "data": cell})).collect())
            .collect();
        let rendered = render_value(&json!({"type": "TABLE", "data": {"ROWS": data}}));

        let expected: String = rows.iter().flatten().map(|cell| format!("\n{cell}")).collect();
        prop_assert_eq!(rendered, expected);
    }

    /// Image array entries render in insertion order
    #[test]
    fn image_array_preserves_insertion_order(titles in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        let mut data = Map::new();
        // Keys in reverse alphabetical order so a sorted map would reorder them.
        for (i, title) in titles.iter().enumerate() {
            data.insert(
                format!("{}", 99 - i),
                json!({"title": title, "url": "u", "description": "d"}),
            );
        }
        let rendered = render_value(&json!({"type": "IMAGE_ARRAY", "data": data}));

        let expected: String = titles.iter().map(|t| format!("\n {t}\n u\n d")).collect();
        prop_assert_eq!(rendered, expected);
    }

    /// Buttons take two lines with a url, one without
    #[test]
    fn button_line_count(label in "[a-z]{1,8}", url in prop::option::of("https://[a-z]{1,8}")) {
        let option = match &url {
            Some(url) => json!({"optionData": {"label": label, "url": url}}),
            None => json!({"optionData": {"label": label}}),
        };
        let rendered = render_value(&json!({"type": "OPTIONS", "data": {"OPTIONS": [option]}}));

        let expected_lines = if url.is_some() { 2 } else { 1 };
        prop_assert_eq!(rendered.lines().filter(|l| !l.is_empty()).count(), expected_lines);
    }

    // ============================================
    // TRANSCRIPT PROPERTIES
    // ============================================

    /// Every accepted turn contributes exactly one header
    #[test]
    fn one_header_per_turn(turns in prop::collection::vec(arb_turn(), 0..10)) {
        for channel in [Channel::WebChat, Channel::Facebook, Channel::WhatsApp, Channel::GoogleMessages] {
            let text = create_adapter(channel).render_transcript(&turns).unwrap();
            prop_assert_eq!(text.matches("\n============").count(), turns.len());
        }
    }

    /// Transcripts are the concatenation of their turns
    #[test]
    fn transcript_is_concatenation(turns in prop::collection::vec(arb_turn(), 0..10)) {
        let adapter = create_adapter(Channel::WebChat);
        let whole = adapter.render_transcript(&turns).unwrap();
        let parts: String = turns
            .iter()
            .enumerate()
            .map(|(i, turn)| adapter.render_turn(turn, i).unwrap())
            .collect();
        prop_assert_eq!(whole, parts);
    }

    /// Unknown selectors always render empty
    #[test]
    fn unknown_selector_is_empty(selector in "[a-z]{1,10}", turns in prop::collection::vec(arb_turn(), 0..5)) {
        prop_assume!(selector.parse::<Channel>().is_err());
        prop_assert_eq!(render_chat_history(&turns, &selector).unwrap(), "");
    }
}
