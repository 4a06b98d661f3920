//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, RenderedTranscript};
use crate::error::Result;

use super::TranscriptRecord;

/// Writes transcripts to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"id": "c1", "turns": 2, "transcript": "\nUSER\n============\nhi\n..."}
/// ]
/// ```
pub fn write_json(
    transcripts: &[RenderedTranscript],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(transcripts, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts transcripts to a pretty-printed JSON array.
pub fn to_json(transcripts: &[RenderedTranscript], config: &OutputConfig) -> Result<String> {
    let records: Vec<TranscriptRecord<'_>> = transcripts
        .iter()
        .map(|t| TranscriptRecord::new(t, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
