//! Web chat widget adapter.

use serde_json::Value;

use crate::channel::{Channel, ChannelAdapter};
use crate::packet::{ContentNode, render, scalar_text};

/// Adapter for the embeddable web chat widget.
///
/// Bot turns carry a data packet rendered through the node renderer. Older
/// widget builds archived bot messages with a `null` speaker and a flat
/// string payload; those render under a `BOT` header as well.
///
/// # Example
///
/// ```rust
/// use chatscribe::channel::ChannelAdapter;
/// use chatscribe::channels::WebChatAdapter;
/// use chatscribe::turn::Turn;
///
/// let adapter = WebChatAdapter::new();
/// let text = adapter.render_transcript(&[Turn::agent("Maya", "Hello")])?;
/// assert_eq!(text, "\nAGENT (Maya)\n============\nHello\n");
/// # Ok::<(), chatscribe::ScribeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WebChatAdapter;

impl WebChatAdapter {
    /// Creates a new web chat adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ChannelAdapter for WebChatAdapter {
    fn name(&self) -> &'static str {
        "WebChat"
    }

    fn channel(&self) -> Channel {
        Channel::WebChat
    }

    fn render_bot(&self, payload: &Value) -> String {
        render(&ContentNode::from_value(payload))
    }

    fn agent_header(&self, agent_name: &str) -> String {
        format!("AGENT ({agent_name})")
    }

    fn render_untagged(&self, payload: &Value) -> Option<String> {
        Some(format!("\n{}", scalar_text(Some(payload))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::Turn;
    use serde_json::json;

    #[test]
    fn test_user_then_bot() {
        let turns = vec![
            Turn::user("hi"),
            Turn::bot(json!({"type": "TEXT", "data": "hello"})),
        ];
        let text = WebChatAdapter::new().render_transcript(&turns).unwrap();
        assert_eq!(text, "\nUSER\n============\nhi\n\nBOT\n============\nhello\n");
    }

    #[test]
    fn test_untagged_turn_is_bot() {
        let turns = vec![Turn::untagged(json!("Welcome back"))];
        let text = WebChatAdapter::new().render_transcript(&turns).unwrap();
        assert_eq!(text, "\nBOT\n============\nWelcome back\n");
    }

    #[test]
    fn test_agent_header_has_space() {
        let text = WebChatAdapter::new()
            .render_transcript(&[Turn::agent("Ravi", "On it")])
            .unwrap();
        assert!(text.starts_with("\nAGENT (Ravi)\n"));
    }

    #[test]
    fn test_unknown_top_level_tag() {
        let turns = vec![Turn::bot(json!({"type": "CAROUSEL", "data": []}))];
        let text = WebChatAdapter::new().render_transcript(&turns).unwrap();
        assert_eq!(
            text,
            "\nBOT\n============\n{\"type\":\"CAROUSEL\",\"data\":[]}\n"
        );
    }

    #[test]
    fn test_composite_bot_turn() {
        let payload = json!({
            "type": "OPTIONS",
            "data": {
                "PACKET": {"type": "PARA1", "data": {"TEXT": "Pick one"}},
                "OPTIONS": [
                    {"type": "OPTION", "optionData": {"label": "Yes"}},
                    {"type": "OPTION", "optionData": {"label": "Docs", "url": "https://d.io"}}
                ]
            }
        });
        let text = WebChatAdapter::new()
            .render_transcript(&[Turn::bot(payload)])
            .unwrap();
        assert_eq!(
            text,
            "\nBOT\n============\n \nPick one\n[[Yes]]\n[[Docs]]\nhttps://d.io>>\n"
        );
    }

    #[test]
    fn test_rejects_unknown_speaker() {
        let turns = vec![Turn::with_speaker("SYSTEM", json!("x"))];
        let err = WebChatAdapter::new().render_transcript(&turns).unwrap_err();
        assert!(err.is_unknown_speaker());
    }
}
