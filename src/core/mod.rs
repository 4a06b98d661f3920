//! Batch processing for chatscribe.
//!
//! This module contains:
//! - [`models`] - Archived conversations, rendered transcripts and output configuration
//! - [`processor`] - Batch rendering and statistics
//! - [`output`] - Format writers (text, CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatscribe::core::{
//!     Conversation, OutputConfig, RenderStats,
//!     render_conversations,
//!     write_text, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod models;
pub mod output;
pub mod processor;

pub use models::{Conversation, OutputConfig, RenderedTranscript};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use output::{to_text, write_text};

pub use processor::{RenderStats, render_conversations};
