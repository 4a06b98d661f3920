//! Output format types for batch transcripts.
//!
//! These types don't depend on the CLI, so library users can pick a
//! writer the same way the `chatscribe` binary does.
//!
//! # Example
//!
//! ```rust
//! use chatscribe::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("transcripts.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok::<(), chatscribe::ScribeError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::{OutputConfig, RenderedTranscript};
use crate::error::{Result, ScribeError};

/// Output format for rendered transcripts.
///
/// - [`Text`](OutputFormat::Text) - Plain transcripts with a banner per conversation
/// - [`Csv`](OutputFormat::Csv) - One row per conversation, semicolon delimited
/// - [`Json`](OutputFormat::Json) - Pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line
///
/// # Example
///
/// ```rust
/// use chatscribe::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text, the archived transcript layout (default)
    #[default]
    Text,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of transcripts
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Text,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Jsonl,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscribe::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.txt").unwrap(), OutputFormat::Text);
    /// assert!(OutputFormat::from_path("out.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ScribeError::invalid_input(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, csv, json, jsonl"),
                None,
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> ScribeError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        _ => "json-output",
    };
    ScribeError::invalid_input(
        "output",
        format!("Output format {format} requires the '{feature}' feature to be enabled"),
        None,
    )
}

/// Writes transcripts to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    transcripts: &[RenderedTranscript],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(transcripts, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(transcripts, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(transcripts, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(transcripts, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts transcripts to a string in the specified format.
///
/// # Example
///
/// ```rust
/// use chatscribe::channel::Channel;
/// use chatscribe::core::models::{OutputConfig, RenderedTranscript};
/// use chatscribe::format::{OutputFormat, to_format_string};
///
/// let transcripts = vec![RenderedTranscript {
///     id: None,
///     channel: Channel::WebChat,
///     created_at: None,
///     turns: 1,
///     text: "\nUSER\n============\nhi\n".into(),
/// }];
/// let text = to_format_string(&transcripts, OutputFormat::Text, &OutputConfig::new())?;
/// assert_eq!(text, "=== Conversation 1 ===\nUSER\n============\nhi\n");
/// # Ok::<(), chatscribe::ScribeError>(())
/// ```
pub fn to_format_string(
    transcripts: &[RenderedTranscript],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(transcripts, config)),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(transcripts, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(transcripts, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(transcripts, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("out.txt").unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_path("/tmp/batch.CSV").unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_path("out.ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        let err = OutputFormat::from_path("out.xml").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Text.mime_type(), "text/plain");
    }

    #[test]
    fn test_every_format_has_a_name() {
        for format in OutputFormat::all() {
            let parsed = OutputFormat::from_str(format.extension()).unwrap();
            assert_eq!(parsed, *format);
        }
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }
}
