//! # Chatscribe
//!
//! A Rust library for turning archived chat transcripts into plain text.
//!
//! ## Overview
//!
//! Chat platforms archive every turn of a conversation: what the user typed,
//! what a human agent answered, and the structured payload the bot sent.
//! Chatscribe renders those archives into a readable transcript for:
//! - **WebChat** - embeddable widget, bot turns are data packets
//! - **Facebook Messenger** - Send API attachments and templates
//! - **WhatsApp** - plain text bot messages
//! - **Google Business Messages** - rich cards and suggestion chips
//!
//! Bot data packets are a recursive content tree (paragraphs, tables,
//! cards, option lists, forms) rendered by [`packet::render`]. Unknown
//! content never fails a transcript; it degrades to a placeholder literal.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscribe::prelude::*;
//! use serde_json::json;
//!
//! let turns: Vec<Turn> = serde_json::from_value(json!([
//!     {"from": "USER", "data": {"text": "hi"}},
//!     {"from": "BOT", "data": {"type": "TEXT", "data": "hello"}}
//! ]))?;
//!
//! let text = render_chat_history(&turns, "WEBCHAT")?;
//! assert_eq!(text, "\nUSER\n============\nhi\n\nBOT\n============\nhello\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`turn`] - Transcript entries ([`Turn`], [`Speaker`])
//! - [`packet`] - Data packet content tree and its renderer
//! - [`channel`] - [`Channel`], the [`ChannelAdapter`] trait and the dispatcher
//! - [`channels`] - One adapter per messaging channel
//! - [`config`] - [`RenderConfig`] and the unknown-speaker policy
//! - [`core`] - Batch rendering of conversations and output writers
//! - [`format`] - Output format selection
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ScribeError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events: `debug` for placeholder fallbacks
//! and adapter selection, `warn` for unknown channel selectors and skipped
//! turns. Install any subscriber to see them.

pub mod channel;
pub mod channels;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod packet;
pub mod turn;

pub use channel::{Channel, ChannelAdapter, render_chat_history, render_chat_history_with};
pub use config::{RenderConfig, SpeakerPolicy};
pub use error::{Result, ScribeError};
pub use turn::{Speaker, Turn};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatscribe::prelude::*;
/// ```
pub mod prelude {
    // Transcript model
    pub use crate::turn::{AgentDetails, Speaker, Turn};

    // Content tree
    pub use crate::packet::{Button, ContentNode, Family, render, render_value};

    // Channels and dispatch
    pub use crate::channel::{
        Channel, ChannelAdapter, create_adapter, render_chat_history, render_chat_history_with,
    };
    pub use crate::channels::{
        FacebookAdapter, GoogleMessagesAdapter, WebChatAdapter, WhatsAppAdapter,
    };

    // Configuration
    pub use crate::config::{RenderConfig, SpeakerPolicy};

    // Errors
    pub use crate::error::{Result, ScribeError};

    // Batch processing
    pub use crate::core::models::{Conversation, OutputConfig, RenderedTranscript};
    pub use crate::core::processor::{RenderStats, render_conversations};
    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    // Formats
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
