//! Plain-text output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, RenderedTranscript};
use crate::error::Result;

use super::TIMESTAMP_FORMAT;

/// Writes transcripts to a plain-text file.
///
/// See [`to_text`] for the layout.
pub fn write_text(
    transcripts: &[RenderedTranscript],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_text(transcripts, config).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Joins transcripts into one document.
///
/// Each transcript is preceded by a banner such as
/// `=== Conversation 2 | id: c2 | WHATSAPP ===`, carrying the metadata
/// enabled in `config`.
pub fn to_text(transcripts: &[RenderedTranscript], config: &OutputConfig) -> String {
    let mut out = String::new();
    for (index, transcript) in transcripts.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&banner(index + 1, transcript, config));
        out.push_str(&transcript.text);
    }
    out
}

fn banner(number: usize, t: &RenderedTranscript, config: &OutputConfig) -> String {
    let mut parts = vec![format!("Conversation {number}")];
    if config.include_ids {
        if let Some(id) = &t.id {
            parts.push(format!("id: {id}"));
        }
    }
    if config.include_channel {
        parts.push(t.channel.selector().to_string());
    }
    if config.include_timestamps {
        if let Some(ts) = t.created_at {
            parts.push(ts.format(TIMESTAMP_FORMAT).to_string());
        }
    }
    format!("=== {} ===", parts.join(" | "))
}
