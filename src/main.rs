use std::io::{self, Write};

use anyhow::{Context, Result};
use bracespan::report::write_event;
use bracespan::{build_options, Args, BraceScanner};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let opts = build_options(&args)?;
    let scanner = BraceScanner::with_options(&opts);

    let mut stdout = io::stdout().lock();
    let mut write_err = None;
    let span = scanner
        .scan_path(&args.file, |event| {
            if write_err.is_none() {
                write_err = write_event(&mut stdout, &opts.label, event).err();
            }
        })
        .with_context(|| format!("Could not scan {:?}", args.file))?;

    if let Some(err) = write_err {
        return Err(err).context("Failed to write report");
    }
    stdout.flush()?;

    match span {
        Some(span) => info!(
            "{} spans lines {}..={}",
            opts.label, span.open_line, span.close_line
        ),
        None => info!("No closed {} block in {:?}", opts.label, args.file),
    }
    Ok(())
}
