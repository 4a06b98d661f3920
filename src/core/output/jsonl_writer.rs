//! JSON Lines (JSONL) output writer.
//!
//! One transcript per line, suited to indexing pipelines that ingest
//! records one at a time.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, RenderedTranscript};
use crate::error::Result;

use super::TranscriptRecord;

/// Writes transcripts to JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"id":"c1","turns":2,"transcript":"\nUSER\n============\nhi\n..."}
/// ```
pub fn write_jsonl(
    transcripts: &[RenderedTranscript],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for t in transcripts {
        serde_json::to_writer(&mut writer, &TranscriptRecord::new(t, config))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts transcripts to a JSONL string.
pub fn to_jsonl(transcripts: &[RenderedTranscript], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for t in transcripts {
        out.push_str(&serde_json::to_string(&TranscriptRecord::new(t, config))?);
        out.push('\n');
    }
    Ok(out)
}
