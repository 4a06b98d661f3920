//! Batch data models: archived conversations and their rendered transcripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::turn::Turn;

/// An archived conversation as exported by the chat platform.
///
/// ```json
/// {
///   "id": "6523f0c1",
///   "channel": "FACEBOOK",
///   "createdAt": "2024-06-15T12:30:00Z",
///   "messages": [{"from": "USER", "data": {"text": "hi"}}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Conversation identifier
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Channel selector; the batch default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// When the conversation started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Ordered transcript turns
    #[serde(default, alias = "chatHistory")]
    pub messages: Vec<Turn>,
}

impl Conversation {
    /// Creates a conversation from its turns.
    pub fn new(messages: Vec<Turn>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Builder-style method to set the identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder-style method to set the channel selector.
    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Builder-style method to set the creation time.
    #[must_use]
    pub fn created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = Some(ts);
        self
    }
}

/// The plain-text rendering of one [`Conversation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTranscript {
    /// Identifier copied from the conversation
    pub id: Option<String>,
    /// Channel the transcript was rendered for
    pub channel: Channel,
    /// Creation time copied from the conversation
    pub created_at: Option<DateTime<Utc>>,
    /// Number of turns in the source conversation
    pub turns: usize,
    /// Rendered transcript text
    pub text: String,
}

/// Configuration for batch output.
/// Controls which metadata fields are written next to each transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include conversation ids
    pub include_ids: bool,
    /// Include the channel of each transcript
    pub include_channel: bool,
    /// Include conversation timestamps
    pub include_timestamps: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }

    #[must_use]
    pub fn with_channel(mut self) -> Self {
        self.include_channel = true;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }
}
