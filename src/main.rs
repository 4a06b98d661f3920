//! # chatscribe CLI
//!
//! Command-line interface for the chatscribe library.

use std::fs;
use std::io::Write;
use std::process;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatscribe::channel::{Channel, create_adapter};
use chatscribe::cli::Args;
use chatscribe::config::RenderConfig;
use chatscribe::core::{Conversation, OutputConfig, RenderStats, render_conversations};
use chatscribe::format::{OutputFormat, to_format_string, write_to_format};
use chatscribe::turn::Turn;
use chatscribe::{Result, ScribeError};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatscribe=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();
    let channel: Channel = args.channel.into();
    let format = args.output_format();

    let mut render_config = RenderConfig::new();
    if args.skip_unknown_speakers {
        render_config = render_config.skip_unknown_speakers();
    }

    info!(%channel, input = %args.input, %format, batch = args.batch, "rendering");
    let raw = fs::read_to_string(&args.input)?;

    if args.batch {
        run_batch(&args, &raw, channel, format, &render_config)
    } else {
        run_single(&args, &raw, channel, &render_config)
    }
}

/// Renders one turn array to a plain-text transcript.
fn run_single(args: &Args, raw: &str, channel: Channel, config: &RenderConfig) -> Result<()> {
    let turns: Vec<Turn> = serde_json::from_str(raw).map_err(|e| {
        ScribeError::invalid_input("transcript", e.to_string(), Some(args.input.clone().into()))
    })?;
    let text = create_adapter(channel).render_transcript_with(&turns, config)?;
    info!(turns = turns.len(), bytes = text.len(), "transcript rendered");
    emit(args.output.as_deref(), &text)
}

/// Renders an array of conversations in the selected output format.
fn run_batch(
    args: &Args,
    raw: &str,
    channel: Channel,
    format: OutputFormat,
    config: &RenderConfig,
) -> Result<()> {
    let conversations: Vec<Conversation> = serde_json::from_str(raw).map_err(|e| {
        ScribeError::invalid_input("batch", e.to_string(), Some(args.input.clone().into()))
    })?;
    let transcripts = render_conversations(&conversations, channel, config)?;

    let mut output_config = OutputConfig::new();
    if args.ids {
        output_config = output_config.with_ids();
    }
    if args.with_channel {
        output_config = output_config.with_channel();
    }
    if args.timestamps {
        output_config = output_config.with_timestamps();
    }

    match args.output.as_deref() {
        Some(path) => write_to_format(&transcripts, path, format, &output_config)?,
        None => emit(
            None,
            &to_format_string(&transcripts, format, &output_config)?,
        )?,
    }

    let stats = RenderStats::from_transcripts(&transcripts);
    info!(
        conversations = stats.conversations,
        turns = stats.turns,
        empty = stats.empty_transcripts,
        "batch rendered"
    );
    Ok(())
}

/// Writes to `path`, or to stdout when no path is given.
fn emit(path: Option<&str>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
