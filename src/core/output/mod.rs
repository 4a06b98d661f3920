//! Output format writers for rendered transcripts.
//!
//! - [`write_text`] / [`to_text`] - Transcripts separated by a banner line
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - One JSON object per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatscribe::Result<()> {
//! use chatscribe::channel::Channel;
//! use chatscribe::core::models::{OutputConfig, RenderedTranscript};
//! use chatscribe::core::output::{to_jsonl, to_text};
//!
//! let transcripts = vec![RenderedTranscript {
//!     id: Some("c1".into()),
//!     channel: Channel::WhatsApp,
//!     created_at: None,
//!     turns: 1,
//!     text: "\nUSER\n============\nhi\n".into(),
//! }];
//!
//! let config = OutputConfig::new().with_ids();
//! assert!(to_text(&transcripts, &config).starts_with("=== Conversation 1 | id: c1 ==="));
//! assert!(to_jsonl(&transcripts, &config)?.starts_with(r#"{"id":"c1""#));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::core::models::{OutputConfig, RenderedTranscript};

/// Timestamp layout shared by the text and CSV writers.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialized shape of one transcript in JSON and JSONL output.
/// Metadata fields appear only when enabled in `OutputConfig`.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct TranscriptRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    turns: usize,
    transcript: &'a str,
}

#[cfg(feature = "json-output")]
impl<'a> TranscriptRecord<'a> {
    fn new(t: &'a RenderedTranscript, config: &OutputConfig) -> Self {
        Self {
            id: t.id.as_deref().filter(|_| config.include_ids),
            channel: config.include_channel.then(|| t.channel.selector()),
            created_at: if config.include_timestamps {
                t.created_at
                    .map(|ts| ts.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            } else {
                None
            },
            turns: t.turns,
            transcript: &t.text,
        }
    }
}
