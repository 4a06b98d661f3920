//! Rendering configuration.
//!
//! The defaults reproduce the archived transcript contract exactly; every
//! option here is opt-in.
//!
//! # Example
//!
//! ```rust
//! use chatscribe::config::{RenderConfig, SpeakerPolicy};
//!
//! let config = RenderConfig::new().with_speaker_policy(SpeakerPolicy::Skip);
//! assert_eq!(config.speaker_policy, SpeakerPolicy::Skip);
//! ```

use serde::{Deserialize, Serialize};

/// What to do with a turn whose speaker the channel does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerPolicy {
    /// Fail the whole transcript with
    /// [`ScribeError::UnknownSpeaker`](crate::ScribeError::UnknownSpeaker).
    #[default]
    Abort,
    /// Drop the turn, log a warning and keep rendering.
    Skip,
}

/// Configuration for transcript rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Handling of unrecognized speakers (default: abort)
    #[serde(default)]
    pub speaker_policy: SpeakerPolicy,
}

impl RenderConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unknown-speaker policy.
    #[must_use]
    pub fn with_speaker_policy(mut self, policy: SpeakerPolicy) -> Self {
        self.speaker_policy = policy;
        self
    }

    /// Shorthand for [`SpeakerPolicy::Skip`].
    #[must_use]
    pub fn skip_unknown_speakers(self) -> Self {
        self.with_speaker_policy(SpeakerPolicy::Skip)
    }
}
