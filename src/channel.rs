//! Channel selection and the transcript dispatcher.
//!
//! Every messaging channel encodes bot turns its own way, so each one gets a
//! [`ChannelAdapter`]. User and agent turns look the same everywhere; the
//! trait's provided methods render them and fold a whole transcript.
//!
//! # Example
//!
//! ```rust
//! use chatscribe::channel::render_chat_history;
//! use chatscribe::turn::Turn;
//! use serde_json::json;
//!
//! let turns = vec![
//!     Turn::user("hi"),
//!     Turn::bot(json!({"type": "TEXT", "data": "hello"})),
//! ];
//! let text = render_chat_history(&turns, "webchat")?;
//! assert_eq!(text, "\nUSER\n============\nhi\n\nBOT\n============\nhello\n");
//!
//! // Unknown channels render nothing.
//! assert_eq!(render_chat_history(&turns, "telegram")?, "");
//! # Ok::<(), chatscribe::ScribeError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{RenderConfig, SpeakerPolicy};
use crate::error::{Result, ScribeError};
use crate::turn::{Speaker, Turn};

/// Underline written below every turn header.
pub const HEADER_UNDERLINE: &str = "============";

/// Supported messaging channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Channel {
    /// Generic embeddable web chat widget
    #[serde(rename = "WEBCHAT")]
    WebChat,

    /// Facebook Messenger
    Facebook,

    /// WhatsApp Business
    #[serde(rename = "WHATSAPP")]
    WhatsApp,

    /// Google Business Messages (RCS-style rich cards)
    GoogleMessages,
}

impl Channel {
    /// Returns the archived selector for this channel.
    pub fn selector(&self) -> &'static str {
        match self {
            Channel::WebChat => "WEBCHAT",
            Channel::Facebook => "FACEBOOK",
            Channel::WhatsApp => "WHATSAPP",
            Channel::GoogleMessages => "GOOGLE_MESSAGES",
        }
    }

    /// Returns all accepted selector names (case-insensitive).
    pub fn all_names() -> &'static [&'static str] {
        &["webchat", "facebook", "whatsapp", "google_messages"]
    }

    /// Returns all available channels.
    pub fn all() -> &'static [Channel] {
        &[
            Channel::WebChat,
            Channel::Facebook,
            Channel::WhatsApp,
            Channel::GoogleMessages,
        ]
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::WebChat => write!(f, "WebChat"),
            Channel::Facebook => write!(f, "Facebook"),
            Channel::WhatsApp => write!(f, "WhatsApp"),
            Channel::GoogleMessages => write!(f, "Google Messages"),
        }
    }
}

impl std::str::FromStr for Channel {
    type Err = ScribeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "WEBCHAT" => Ok(Channel::WebChat),
            "FACEBOOK" => Ok(Channel::Facebook),
            "WHATSAPP" => Ok(Channel::WhatsApp),
            "GOOGLE_MESSAGES" => Ok(Channel::GoogleMessages),
            _ => Err(ScribeError::unknown_channel(s)),
        }
    }
}

/// Renders transcripts for one messaging channel.
///
/// Implementors supply the bot rendering; the provided methods take care of
/// headers, user and agent turns, and the speaker contract.
///
/// # Implementation Notes
///
/// Adapters must implement:
/// - [`name`](ChannelAdapter::name) - Adapter identifier, used in errors
/// - [`channel`](ChannelAdapter::channel) - Channel this adapter handles
/// - [`render_bot`](ChannelAdapter::render_bot) - Body of a BOT turn
///
/// Optionally override:
/// - [`agent_header`](ChannelAdapter::agent_header) - Header text of AGENT turns
/// - [`render_untagged`](ChannelAdapter::render_untagged) - Body of a turn
///   whose speaker is `null`, for channels that accept one
pub trait ChannelAdapter: Send + Sync {
    /// Returns the human-readable name of this adapter.
    fn name(&self) -> &'static str;

    /// Returns the channel this adapter handles.
    fn channel(&self) -> Channel;

    /// Renders the body of a BOT turn.
    fn render_bot(&self, payload: &Value) -> String;

    /// Header line for an agent turn.
    fn agent_header(&self, agent_name: &str) -> String {
        format!("AGENT({agent_name})")
    }

    /// Body of a turn with a `null` speaker, rendered under a BOT header.
    ///
    /// Returns `None` when the channel does not accept untagged turns.
    fn render_untagged(&self, _payload: &Value) -> Option<String> {
        None
    }

    /// Renders a single turn, `index` being its position in the transcript.
    ///
    /// # Errors
    ///
    /// Returns [`ScribeError::UnknownSpeaker`] if the speaker is not one
    /// this channel accepts.
    fn render_turn(&self, turn: &Turn, index: usize) -> Result<String> {
        let (header, body) = match &turn.from {
            Speaker::User => ("USER".to_string(), format!("\n{}", turn.text())),
            Speaker::Bot => ("BOT".to_string(), self.render_bot(&turn.data)),
            Speaker::Agent => (
                self.agent_header(turn.agent_name()),
                format!("\n{}", turn.text()),
            ),
            Speaker::Untagged => match self.render_untagged(&turn.data) {
                Some(body) => ("BOT".to_string(), body),
                None => return Err(ScribeError::unknown_speaker(self.name(), index, None)),
            },
            Speaker::Missing => {
                return Err(ScribeError::unknown_speaker(self.name(), index, None));
            }
            Speaker::Other(tag) => {
                return Err(ScribeError::unknown_speaker(self.name(), index, Some(tag.as_str())));
            }
        };
        Ok(finish_turn(&header, &body))
    }

    /// Renders a transcript with the default configuration.
    fn render_transcript(&self, turns: &[Turn]) -> Result<String> {
        self.render_transcript_with(turns, &RenderConfig::default())
    }

    /// Renders a transcript, concatenating turns in order.
    ///
    /// # Errors
    ///
    /// Under [`SpeakerPolicy::Abort`] the first unknown speaker fails the
    /// whole transcript and nothing is returned.
    fn render_transcript_with(&self, turns: &[Turn], config: &RenderConfig) -> Result<String> {
        let mut out = String::new();
        for (index, turn) in turns.iter().enumerate() {
            match self.render_turn(turn, index) {
                Ok(rendered) => out.push_str(&rendered),
                Err(err)
                    if err.is_unknown_speaker() && config.speaker_policy == SpeakerPolicy::Skip =>
                {
                    tracing::warn!(channel = self.name(), index, "skipping turn: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }
}

/// Assembles a turn: header, underline, body, one trailing newline.
fn finish_turn(header: &str, body: &str) -> String {
    format!(
        "\n{header}\n{HEADER_UNDERLINE}{}\n",
        body.trim_end_matches('\n')
    )
}

/// Creates the adapter for a channel.
///
/// # Example
///
/// ```rust
/// use chatscribe::channel::{Channel, create_adapter};
///
/// let adapter = create_adapter(Channel::Facebook);
/// assert_eq!(adapter.name(), "Facebook");
/// ```
pub fn create_adapter(channel: Channel) -> Box<dyn ChannelAdapter> {
    match channel {
        Channel::WebChat => Box::new(crate::channels::WebChatAdapter::new()),
        Channel::Facebook => Box::new(crate::channels::FacebookAdapter::new()),
        Channel::WhatsApp => Box::new(crate::channels::WhatsAppAdapter::new()),
        Channel::GoogleMessages => Box::new(crate::channels::GoogleMessagesAdapter::new()),
    }
}

/// Renders a transcript for the channel named by `selector`.
///
/// The selector is matched case-insensitively against
/// [`Channel::all_names`]; an unrecognized selector renders an empty string.
///
/// # Errors
///
/// Returns [`ScribeError::UnknownSpeaker`] if a turn has a speaker the
/// channel does not accept.
pub fn render_chat_history(turns: &[Turn], selector: &str) -> Result<String> {
    render_chat_history_with(turns, selector, &RenderConfig::default())
}

/// [`render_chat_history`] with an explicit configuration.
pub fn render_chat_history_with(
    turns: &[Turn],
    selector: &str,
    config: &RenderConfig,
) -> Result<String> {
    let Ok(channel) = selector.parse::<Channel>() else {
        tracing::warn!(selector, "unknown channel selector, rendering empty transcript");
        return Ok(String::new());
    };
    tracing::debug!(%channel, turns = turns.len(), "rendering transcript");
    create_adapter(channel).render_transcript_with(turns, config)
}
