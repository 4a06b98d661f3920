//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, RenderedTranscript};
use crate::error::{Result, ScribeError};

use super::TIMESTAMP_FORMAT;

/// Writes transcripts to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Turns`, `Transcript`
///   - With IDs: `ID` first
///   - With channel: `Channel` before `Turns`
///   - With timestamps: `Timestamp` before `Turns`
/// - Encoding: UTF-8
pub fn write_csv(
    transcripts: &[RenderedTranscript],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let csv = to_csv(transcripts, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Converts transcripts to a CSV string.
pub fn to_csv(transcripts: &[RenderedTranscript], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(build_header(config))?;
    for transcript in transcripts {
        writer.write_record(build_record(transcript, config))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ScribeError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_ids {
        header.push("ID");
    }
    if config.include_channel {
        header.push("Channel");
    }
    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Turns");
    header.push("Transcript");
    header
}

fn build_record(t: &RenderedTranscript, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_ids {
        record.push(t.id.clone().unwrap_or_default());
    }
    if config.include_channel {
        record.push(t.channel.selector().to_string());
    }
    if config.include_timestamps {
        record.push(
            t.created_at
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        );
    }

    record.push(t.turns.to_string());
    record.push(t.text.clone());
    record
}
