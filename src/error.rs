//! Unified error types for chatscribe.
//!
//! This module provides a single [`ScribeError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Two failure classes are kept apart:
//!
//! - **Speaker errors** ([`ScribeError::UnknownSpeaker`]) are fatal for the
//!   whole transcript. A turn whose `from` is not `USER`, `BOT` or `AGENT`
//!   means the archive itself is broken.
//! - **Content errors** never surface here. An unknown content node renders
//!   to a placeholder literal instead (see [`crate::packet::render`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscribe operations.
///
/// # Example
///
/// ```rust
/// use chatscribe::error::Result;
///
/// fn my_function() -> Result<String> {
///     Ok(String::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScribeError>;

/// The error type for all chatscribe operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScribeError {
    /// A turn carried a speaker tag the channel does not accept.
    ///
    /// Rendering stops at the first such turn and no partial transcript is
    /// returned.
    #[error("Unrecognized speaker {} at turn {index} of {channel} transcript", speaker.as_deref().map_or_else(|| "null".to_string(), |s| format!("'{s}'")))]
    UnknownSpeaker {
        /// Name of the channel adapter that rejected the turn
        channel: &'static str,
        /// Zero-based position of the turn in the transcript
        index: usize,
        /// The raw speaker value (`None` for a null/missing speaker)
        speaker: Option<String>,
    },

    /// A channel selector did not name a supported channel.
    ///
    /// Only raised by batch and CLI entry points; the transcript dispatcher
    /// renders an empty string instead.
    #[error("Unknown channel '{input}'. Expected one of: {}", crate::channel::Channel::all_names().join(", "))]
    UnknownChannel {
        /// The selector that was provided
        input: String,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input document does not have the expected structure.
    #[error("Invalid {format} input{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidInput {
        /// The kind of document that was expected (e.g. "transcript")
        format: &'static str,
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ScribeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ScribeError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ScribeError {
    /// Creates an unknown speaker error.
    pub fn unknown_speaker(channel: &'static str, index: usize, speaker: Option<&str>) -> Self {
        ScribeError::UnknownSpeaker {
            channel,
            index,
            speaker: speaker.map(ToString::to_string),
        }
    }

    /// Creates an unknown channel error.
    pub fn unknown_channel(input: impl Into<String>) -> Self {
        ScribeError::UnknownChannel {
            input: input.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(
        format: &'static str,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        ScribeError::InvalidInput {
            format,
            message: message.into(),
            path,
        }
    }

    /// Returns `true` if this is an unknown speaker error.
    pub fn is_unknown_speaker(&self) -> bool {
        matches!(self, ScribeError::UnknownSpeaker { .. })
    }

    /// Returns `true` if this is an unknown channel error.
    pub fn is_unknown_channel(&self) -> bool {
        matches!(self, ScribeError::UnknownChannel { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ScribeError::Io(_))
    }

    /// Returns `true` if this is an invalid input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScribeError::InvalidInput { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
