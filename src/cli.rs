use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::comment::LineComment;

pub const DEFAULT_MARKER: &str = "class GameEngine";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source file to scan
    pub file: PathBuf,

    /// Text that identifies the declaration line (matched literally)
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Name printed in the report (defaults to the last word of the marker)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Lines starting with this prefix are skipped entirely
    #[arg(short, long, default_value = "//")]
    pub comment_prefix: String,

    /// Decode non-UTF-8 input as Windows-1252 instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub marker: String,
    pub label: String,
    pub comment: LineComment,
    pub lossy: bool,
}

impl Options {
    pub fn new(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        Self {
            label: default_label(&marker),
            marker,
            comment: LineComment::default(),
            lossy: false,
        }
    }
}

/// `class GameEngine` -> `GameEngine`
pub fn default_label(marker: &str) -> String {
    marker
        .split_whitespace()
        .last()
        .unwrap_or(marker)
        .to_string()
}

pub fn build_options(args: &Args) -> Result<Options> {
    if args.marker.is_empty() {
        bail!("--marker must not be empty");
    }
    if args.comment_prefix.is_empty() {
        bail!("--comment-prefix must not be empty");
    }

    Ok(Options {
        marker: args.marker.clone(),
        label: args
            .label
            .clone()
            .unwrap_or_else(|| default_label(&args.marker)),
        comment: LineComment::new(args.comment_prefix.as_str()),
        lossy: args.lossy,
    })
}
