use std::io::{self, Write};

use crate::scanner::ScanEvent;

/// Output lines for one event, e.g. `GameEngine starts at 2`.
pub fn render_event(label: &str, event: &ScanEvent) -> Vec<String> {
    match event {
        ScanEvent::Opened { line } => vec![format!("{label} starts at {line}")],
        ScanEvent::Closed { line, text } => vec![
            format!("{label} closes at {line}"),
            format!("Line content: {text}"),
        ],
    }
}

pub fn write_event<W: Write>(out: &mut W, label: &str, event: &ScanEvent) -> io::Result<()> {
    for line in render_event(label, event) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
