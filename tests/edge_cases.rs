//! Edge case tests for the data packet renderer and channel adapters.
//!
//! Malformed and unexpected payloads must still render; only speaker
//! errors are allowed to fail a transcript.

use chatscribe::packet::{
    COMPOSITE_PLACEHOLDER, ContentNode, PRIMITIVE_PLACEHOLDER, render_composite, render_primitive,
    render_value,
};
use chatscribe::prelude::*;
use serde_json::{Value, json};

fn node(value: Value) -> ContentNode {
    ContentNode::from_value(&value)
}

// =========================================================================
// Unknown tags
// =========================================================================

#[test]
fn test_unknown_tag_in_each_context() {
    let unknown = node(json!({"type": "SPARKLINE", "data": {}}));

    assert_eq!(render_primitive(&unknown), PRIMITIVE_PLACEHOLDER);
    assert_eq!(render_composite(&unknown), COMPOSITE_PLACEHOLDER);
    assert_eq!(
        render_value(&json!({"type": "SPARKLINE", "data": {}})),
        "\n{\"type\":\"SPARKLINE\",\"data\":{}}"
    );
}

#[test]
fn test_primitive_in_composite_context() {
    let para = node(json!({"type": "PARA1", "data": {"TEXT": "x"}}));
    assert_eq!(render_composite(&para), COMPOSITE_PLACEHOLDER);
}

#[test]
fn test_composite_in_primitive_context() {
    let card = node(json!({"type": "CARD_TYPE1", "data": {"SECTIONS": []}}));
    assert_eq!(render_primitive(&card), PRIMITIVE_PLACEHOLDER);
}

#[test]
fn test_form_renders_in_both_contexts() {
    let form = node(json!({"type": "FORM", "data": {"TITLE": "Signup"}}));
    assert_eq!(render_primitive(&form), "\n Signup\n Fill Form");
    assert_eq!(render_composite(&form), "\n Signup\n Fill Form");
}

#[test]
fn test_lowercase_tag_is_unknown() {
    assert_eq!(render_value(&json!({"type": "text", "data": "hi"})), "\n{\"type\":\"text\",\"data\":\"hi\"}");
}

// =========================================================================
// Malformed payloads
// =========================================================================

#[test]
fn test_non_object_payloads() {
    assert_eq!(render_value(&json!("plain string")), "\nplain string");
    assert_eq!(render_value(&json!(42)), "\n42");
    assert_eq!(render_value(&json!(null)), "\n");
    assert_eq!(render_value(&json!([1, 2])), "\n[1,2]");
}

#[test]
fn test_missing_fields_render_empty() {
    assert_eq!(render_value(&json!({"type": "TEXT"})), "\n");
    assert_eq!(render_value(&json!({"type": "CALL", "data": {}})), "\nCall Now");
    assert_eq!(
        render_value(&json!({"type": "ADDRESS", "data": {"city": "Pune"}})),
        "\n Door no  \n Building  \n Locality  \n City Pune \n State  \n Country "
    );
}

#[test]
fn test_card_with_non_array_sections() {
    let rendered = render_value(&json!({
        "type": "CARD_TYPE1",
        "data": {"SECTIONS": "oops", "BUTTONS": {"label": "x"}}
    }));
    assert_eq!(rendered, "");
}

#[test]
fn test_options_without_packet() {
    let rendered = render_value(&json!({
        "type": "OPTIONS",
        "data": {"OPTIONS": [{"optionData": {"label": "Yes"}}]}
    }));
    assert_eq!(rendered, "\n[[Yes]]");
}

#[test]
fn test_button_with_empty_url_is_single_line() {
    let rendered = render_value(&json!({
        "type": "OPTIONS",
        "data": {"OPTIONS": [{"optionData": {"label": "Go", "url": ""}}]}
    }));
    assert_eq!(rendered, "\n[[Go]]");
}

#[test]
fn test_deeply_nested_card_groups() {
    let mut packet = json!({"type": "TEXT", "data": "leaf"});
    for _ in 0..32 {
        packet = json!({
            "type": "VERT_CARDS_TYPE1",
            "data": {"TITLE": "", "DESCRIPTION": "", "CARDS": [packet]}
        });
    }
    let rendered = render_value(&packet);
    assert!(rendered.ends_with(COMPOSITE_PLACEHOLDER));
}

// =========================================================================
// Separators and literals
// =========================================================================

#[test]
fn test_separator_spellings() {
    for tag in ["HSEPERETOR", "HSEPARATOR", "VSEPERETOR"] {
        assert_eq!(render_value(&json!({"type": tag, "data": {}})), "", "{tag}");
    }
}

#[test]
fn test_upload_literals_have_no_newline() {
    assert_eq!(render_value(&json!({"type": "PHOTO"})), "Photo Uploaded");
    assert_eq!(render_value(&json!({"type": "VOICE"})), "Voice Uploaded");
}

// =========================================================================
// Turns
// =========================================================================

#[test]
fn test_unicode_text_is_preserved() {
    let turns = vec![Turn::user("Привет 👋"), Turn::agent("Zoë", "こんにちは")];
    let text = render_chat_history(&turns, "FACEBOOK").unwrap();
    assert_eq!(
        text,
        "\nUSER\n============\nПривет 👋\n\nAGENT(Zoë)\n============\nこんにちは\n"
    );
}

#[test]
fn test_multiline_text_keeps_inner_newlines() {
    let turns = vec![Turn::user("line one\nline two\n\n")];
    let text = render_chat_history(&turns, "WHATSAPP").unwrap();
    assert_eq!(text, "\nUSER\n============\nline one\nline two\n");
}

#[test]
fn test_null_speaker_only_accepted_by_webchat() {
    let turns = vec![Turn::untagged(json!("hello"))];
    assert!(render_chat_history(&turns, "WEBCHAT").is_ok());
    for selector in ["FACEBOOK", "WHATSAPP", "GOOGLE_MESSAGES"] {
        let err = render_chat_history(&turns, selector).unwrap_err();
        assert!(err.is_unknown_speaker());
        assert!(err.to_string().contains("null"));
    }
}

#[test]
fn test_missing_speaker_field_is_fatal() {
    let turns: Vec<Turn> = serde_json::from_value(json!([{"data": "hello"}])).unwrap();
    let err = render_chat_history(&turns, "WEBCHAT").unwrap_err();
    assert!(matches!(err, ScribeError::UnknownSpeaker { index: 0, .. }));

    let null_speaker: Vec<Turn> =
        serde_json::from_value(json!([{"from": null, "data": "hello"}])).unwrap();
    assert_eq!(
        render_chat_history(&null_speaker, "WEBCHAT").unwrap(),
        "\nBOT\n============\nhello\n"
    );
}

#[test]
fn test_lowercase_speaker_is_unknown() {
    let turns: Vec<Turn> =
        serde_json::from_value(json!([{"from": "user", "data": {"text": "hi"}}])).unwrap();
    let err = render_chat_history(&turns, "WEBCHAT").unwrap_err();
    assert!(matches!(err, ScribeError::UnknownSpeaker { index: 0, .. }));
}
