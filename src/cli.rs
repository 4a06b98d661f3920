//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`ChannelArg`] - Channel selector accepted on the command line
//! - [`FormatArg`] - Output format options
//!
//! ```rust
//! use chatscribe::channel::Channel;
//! use chatscribe::cli::ChannelArg;
//!
//! assert_eq!(Channel::from(ChannelArg::GoogleMessages), Channel::GoogleMessages);
//! ```

use clap::{Parser, ValueEnum};

use crate::channel::Channel;
use crate::format::OutputFormat;

/// Render archived chat transcripts from WebChat, Facebook Messenger,
/// WhatsApp and Google Business Messages into plain text.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscribe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscribe webchat turns.json
    chatscribe facebook turns.json -o transcript.txt
    chatscribe google_messages export.json --batch -o transcripts.jsonl
    chatscribe whatsapp export.json --batch -f csv --ids -t")]
pub struct Args {
    /// Channel the transcript was recorded on
    #[arg(value_enum)]
    pub channel: ChannelArg,

    /// Path to input file (turn array, or conversation array with --batch)
    pub input: String,

    /// Path to output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (detected from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Treat the input as an array of conversations
    #[arg(long)]
    pub batch: bool,

    /// Drop turns with unrecognized speakers instead of failing
    #[arg(long)]
    pub skip_unknown_speakers: bool,

    /// Include conversation timestamps in batch output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include conversation ids in batch output
    #[arg(long)]
    pub ids: bool,

    /// Include each conversation's channel in batch output
    #[arg(long)]
    pub with_channel: bool,
}

impl Args {
    /// Resolves the output format: explicit flag, then output extension,
    /// then plain text.
    pub fn output_format(&self) -> OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Channel selector on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ChannelArg {
    /// Embeddable web chat widget
    #[value(name = "webchat")]
    WebChat,

    /// Facebook Messenger
    #[value(alias = "fb")]
    Facebook,

    /// WhatsApp Business
    #[value(name = "whatsapp", alias = "wa")]
    WhatsApp,

    /// Google Business Messages
    #[value(name = "google_messages", alias = "google-messages")]
    GoogleMessages,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Channel {
        match arg {
            ChannelArg::WebChat => Channel::WebChat,
            ChannelArg::Facebook => Channel::Facebook,
            ChannelArg::WhatsApp => Channel::WhatsApp,
            ChannelArg::GoogleMessages => Channel::GoogleMessages,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// Plain text transcript
    #[default]
    #[value(alias = "txt")]
    Text,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array
    Json,

    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatscribe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(parse(&["webchat", "in.json"]).channel, ChannelArg::WebChat);
        assert_eq!(parse(&["wa", "in.json"]).channel, ChannelArg::WhatsApp);
        assert_eq!(
            parse(&["google_messages", "in.json"]).channel,
            ChannelArg::GoogleMessages
        );
        assert!(Args::try_parse_from(["chatscribe", "sms", "in.json"]).is_err());
    }

    #[test]
    fn test_output_format_resolution() {
        assert_eq!(parse(&["webchat", "in.json"]).output_format(), OutputFormat::Text);
        assert_eq!(
            parse(&["webchat", "in.json", "-o", "out.jsonl"]).output_format(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            parse(&["webchat", "in.json", "-o", "out.jsonl", "-f", "csv"]).output_format(),
            OutputFormat::Csv
        );
        assert_eq!(
            parse(&["webchat", "in.json", "-o", "out.log"]).output_format(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "facebook",
            "in.json",
            "--batch",
            "--skip-unknown-speakers",
            "-t",
            "--ids",
        ]);
        assert!(args.batch);
        assert!(args.skip_unknown_speakers);
        assert!(args.timestamps);
        assert!(args.ids);
        assert!(!args.with_channel);
    }

    #[test]
    fn test_channel_conversion() {
        for arg in ChannelArg::value_variants() {
            let channel = Channel::from(*arg);
            assert!(Channel::all().contains(&channel));
        }
    }
}
