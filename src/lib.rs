//
// lib.rs
// BraceSpan-rs
//
// Library entry that re-exports modules so the binary and the tests can reach CLI parsing, the brace scanner, reporting and file helpers.
//
// Thales Matheus Mendonça Santos - November 2025
//
pub mod cli;
pub mod comment;
pub mod error;
pub mod report;
pub mod scanner;
pub mod utils;

pub use cli::{build_options, Args, Options, DEFAULT_MARKER};
pub use comment::LineComment;
pub use error::ScanError;
pub use scanner::{BraceScanner, BraceSpan, Line, ScanEvent, ScanState};
