//! Brace-depth scan that locates where a declaration opens and closes.
//!
//! The scan is a single forward pass. Lines whose trimmed text starts with the
//! comment prefix are skipped. The first line containing the marker opens the
//! span; every `{` and `}` on every other line (and on the marker line itself,
//! before and after the marker) moves a signed depth counter, and the first
//! `}` that brings the counter back to zero once the marker has been seen
//! closes it.
//!
//! Braces inside string literals or trailing comments are counted like any
//! other character.

use std::path::Path;

use tracing::{debug, trace};

use crate::cli::Options;
use crate::comment::LineComment;
use crate::error::Result;
use crate::utils::{read_text, split_lines};

/// A numbered source line (1-based), without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Mutable state threaded through one pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub depth: i64,
    pub marker_found: bool,
    pub marker_line: usize,
}

impl ScanState {
    /// Records the marker line. Only the first call has any effect.
    fn mark(&mut self, line: usize) -> bool {
        if self.marker_found {
            return false;
        }
        self.marker_found = true;
        self.marker_line = line;
        true
    }

    /// Applies one character. Returns true when it closes the span.
    fn apply(&mut self, ch: char) -> bool {
        match ch {
            '{' => {
                self.depth += 1;
                false
            }
            '}' => {
                self.depth -= 1;
                self.marker_found && self.depth == 0
            }
            _ => false,
        }
    }
}

/// What the scan reports while it runs. `Closed` is always the last event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Opened { line: usize },
    Closed { line: usize, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraceSpan {
    pub open_line: usize,
    pub close_line: usize,
    /// The closing line with surrounding whitespace removed
    pub close_line_text: String,
}

#[derive(Debug, Clone)]
pub struct BraceScanner {
    marker: String,
    comment: LineComment,
    lossy: bool,
}

impl BraceScanner {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            comment: LineComment::default(),
            lossy: false,
        }
    }

    pub fn with_options(opts: &Options) -> Self {
        Self {
            marker: opts.marker.clone(),
            comment: opts.comment.clone(),
            lossy: opts.lossy,
        }
    }

    pub fn with_comment(mut self, comment: LineComment) -> Self {
        self.comment = comment;
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Reads `path` and scans it. The file is closed before scanning starts.
    pub fn scan_path<F>(&self, path: &Path, on_event: F) -> Result<Option<BraceSpan>>
    where
        F: FnMut(&ScanEvent),
    {
        let text = read_text(path, self.lossy)?;
        debug!("Scanning {:?} for {:?}", path, self.marker);
        Ok(self.scan_str(&text, on_event))
    }

    pub fn scan_str<F>(&self, text: &str, on_event: F) -> Option<BraceSpan>
    where
        F: FnMut(&ScanEvent),
    {
        let lines = split_lines(text)
            .into_iter()
            .enumerate()
            .map(|(i, text)| Line { number: i + 1, text });
        self.scan_lines(lines, on_event)
    }

    pub fn scan_lines<'a, I, F>(&self, lines: I, mut on_event: F) -> Option<BraceSpan>
    where
        I: IntoIterator<Item = Line<'a>>,
        F: FnMut(&ScanEvent),
    {
        let mut state = ScanState::default();

        for line in lines {
            if self.comment.is_comment(line.text) {
                trace!("Skipping comment line {}", line.number);
                continue;
            }

            if line.text.contains(self.marker.as_str()) && state.mark(line.number) {
                debug!("Marker found at line {} (depth {})", line.number, state.depth);
                on_event(&ScanEvent::Opened { line: line.number });
            }

            for ch in line.text.chars() {
                if state.apply(ch) {
                    let text = line.text.trim().to_string();
                    debug!(
                        "Depth back to zero at line {} (opened at {})",
                        line.number, state.marker_line
                    );
                    on_event(&ScanEvent::Closed {
                        line: line.number,
                        text: text.clone(),
                    });
                    return Some(BraceSpan {
                        open_line: state.marker_line,
                        close_line: line.number,
                        close_line_text: text,
                    });
                }
            }
        }

        debug!(
            "Reached end of input (marker found: {}, depth {})",
            state.marker_found, state.depth
        );
        None
    }
}
