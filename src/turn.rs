//! Transcript entries.
//!
//! A transcript is an ordered list of [`Turn`]s exactly as the chat platform
//! archived them:
//!
//! ```json
//! [
//!   {"from": "USER",  "data": {"text": "hi"}},
//!   {"from": "BOT",   "data": {"type": "TEXT", "data": "hello"}},
//!   {"from": "AGENT", "data": {"text": "How can I help?"}, "agentDetails": {"agentName": "Maya"}}
//! ]
//! ```
//!
//! The bot payload stays a raw [`serde_json::Value`]; each channel adapter
//! decides how to read it.
//!
//! # Examples
//!
//! ```
//! use chatscribe::turn::{Speaker, Turn};
//! use serde_json::json;
//!
//! let turn = Turn::agent("Maya", "How can I help?");
//! assert_eq!(turn.from, Speaker::Agent);
//! assert_eq!(turn.agent_name(), "Maya");
//!
//! let parsed: Turn = serde_json::from_value(json!({"from": "USER", "data": {"text": "hi"}}))?;
//! assert_eq!(parsed, Turn::user("hi"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::packet::body_text;

/// Who authored a turn.
///
/// The archived `from` field is matched exactly: `"USER"`, `"BOT"` and
/// `"AGENT"` are recognized, an explicit `null` becomes
/// [`Speaker::Untagged`], and anything else is kept verbatim in
/// [`Speaker::Other`] so the adapter can report it. A turn without a
/// `from` field at all is [`Speaker::Missing`], which no channel accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Speaker {
    /// End user of the chat widget.
    User,
    /// Automated bot response.
    Bot,
    /// Human agent who took over the conversation.
    Agent,
    /// `from` was an explicit `null`.
    Untagged,
    /// `from` was absent.
    #[default]
    Missing,
    /// Any other tag.
    Other(String),
}

impl Speaker {
    /// Returns the archived tag, `None` for an untagged or missing speaker.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Speaker::User => Some("USER"),
            Speaker::Bot => Some("BOT"),
            Speaker::Agent => Some("AGENT"),
            Speaker::Untagged | Speaker::Missing => None,
            Speaker::Other(tag) => Some(tag),
        }
    }

    /// Returns `true` when the turn had no `from` field.
    pub fn is_missing(&self) -> bool {
        matches!(self, Speaker::Missing)
    }
}

impl From<Option<String>> for Speaker {
    fn from(tag: Option<String>) -> Self {
        let Some(tag) = tag else {
            return Speaker::Untagged;
        };
        match tag.as_str() {
            "USER" => Speaker::User,
            "BOT" => Speaker::Bot,
            "AGENT" => Speaker::Agent,
            _ => Speaker::Other(tag),
        }
    }
}

impl From<Speaker> for Option<String> {
    fn from(speaker: Speaker) -> Self {
        speaker.as_tag().map(ToString::to_string)
    }
}

/// Details attached to agent turns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgentDetails {
    /// Display name of the human agent.
    #[serde(rename = "agentName", default)]
    pub agent_name: String,
}

/// One speaker contribution in a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Who authored this turn.
    #[serde(default, skip_serializing_if = "Speaker::is_missing")]
    pub from: Speaker,

    /// Speaker-dependent payload.
    ///
    /// - USER / AGENT: `{"text": "..."}`
    /// - BOT: channel specific (data packet, attachment envelope, rich card,
    ///   plain string)
    #[serde(default)]
    pub data: Value,

    /// Present on AGENT turns.
    #[serde(rename = "agentDetails", default, skip_serializing_if = "Option::is_none")]
    pub agent_details: Option<AgentDetails>,
}

impl Turn {
    /// Creates a user turn carrying `text`.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            from: Speaker::User,
            data: json!({ "text": text.into() }),
            agent_details: None,
        }
    }

    /// Creates a bot turn with a raw payload.
    pub fn bot(payload: Value) -> Self {
        Self {
            from: Speaker::Bot,
            data: payload,
            agent_details: None,
        }
    }

    /// Creates an agent turn.
    pub fn agent(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: Speaker::Agent,
            data: json!({ "text": text.into() }),
            agent_details: Some(AgentDetails {
                agent_name: name.into(),
            }),
        }
    }

    /// Creates a turn whose `from` is `null`.
    pub fn untagged(payload: Value) -> Self {
        Self {
            from: Speaker::Untagged,
            data: payload,
            agent_details: None,
        }
    }

    /// Creates a turn with an arbitrary speaker tag.
    pub fn with_speaker(tag: impl Into<String>, payload: Value) -> Self {
        Self {
            from: Speaker::from(Some(tag.into())),
            data: payload,
            agent_details: None,
        }
    }

    /// Returns the agent's name, or an empty string when none was archived.
    pub fn agent_name(&self) -> &str {
        self.agent_details
            .as_ref()
            .map_or("", |details| details.agent_name.as_str())
    }

    /// Returns the `text` of a USER/AGENT payload.
    ///
    /// A bare string payload is taken as the text itself.
    pub fn text(&self) -> String {
        body_text(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_from_tag() {
        assert_eq!(Speaker::from(Some("USER".to_string())), Speaker::User);
        assert_eq!(Speaker::from(Some("BOT".to_string())), Speaker::Bot);
        assert_eq!(Speaker::from(Some("AGENT".to_string())), Speaker::Agent);
        assert_eq!(Speaker::from(None), Speaker::Untagged);
        assert_eq!(
            Speaker::from(Some("user".to_string())),
            Speaker::Other("user".to_string())
        );
    }

    #[test]
    fn test_deserialize_null_and_missing_speaker() {
        let turn: Turn = serde_json::from_str(r#"{"from": null, "data": "hello"}"#).unwrap();
        assert_eq!(turn.from, Speaker::Untagged);

        let turn: Turn = serde_json::from_str(r#"{"data": "hello"}"#).unwrap();
        assert_eq!(turn.from, Speaker::Missing);
        assert!(turn.from.is_missing());
        assert_eq!(turn.from.as_tag(), None);
    }

    #[test]
    fn test_missing_speaker_stays_missing_when_serialized() {
        let turn: Turn = serde_json::from_str(r#"{"data": "hello"}"#).unwrap();
        let json = serde_json::to_value(&turn).unwrap();
        assert!(json.get("from").is_none());
        let back: Turn = serde_json::from_value(json).unwrap();
        assert_eq!(back.from, Speaker::Missing);
    }

    #[test]
    fn test_deserialize_agent() {
        let turn: Turn = serde_json::from_str(
            r#"{"from": "AGENT", "data": {"text": "On it"}, "agentDetails": {"agentName": "Ravi"}}"#,
        )
        .unwrap();
        assert_eq!(turn.from, Speaker::Agent);
        assert_eq!(turn.agent_name(), "Ravi");
        assert_eq!(turn.text(), "On it");
    }

    #[test]
    fn test_serialize_keeps_archived_shape() {
        let json = serde_json::to_value(Turn::agent("Ravi", "On it")).unwrap();
        assert_eq!(json["from"], "AGENT");
        assert_eq!(json["agentDetails"]["agentName"], "Ravi");

        let json = serde_json::to_value(Turn::untagged(json!("x"))).unwrap();
        assert!(json["from"].is_null());
        assert!(json.get("agentDetails").is_none());
    }

    #[test]
    fn test_text_variants() {
        assert_eq!(Turn::user("hi").text(), "hi");
        assert_eq!(Turn::bot(json!("plain")).text(), "plain");
        assert_eq!(Turn::bot(json!({"other": 1})).text(), "");
        assert_eq!(Turn::bot(json!({"text": 42})).text(), "42");
    }

    #[test]
    fn test_agent_name_missing() {
        let turn = Turn::with_speaker("AGENT", json!({"text": "hello"}));
        assert_eq!(turn.agent_name(), "");
    }
}
