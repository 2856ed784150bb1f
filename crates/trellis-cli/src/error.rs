//! Error types for the Trellis CLI.
//!
//! The script generator itself never fails; every error the tool can
//! surface comes from the I/O boundary: reading input, parsing the
//! declaration JSON, or loading the TOML configuration. Each variant
//! carries a miette diagnostic code for rich terminal reporting.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the Trellis command-line tool.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(trellis::io))]
    Io(#[from] io::Error),

    #[error("Failed to parse declaration input: {0}")]
    #[diagnostic(
        code(trellis::input),
        help("the input file must contain a JSON array of declaration objects")
    )]
    Input(#[from] serde_json::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    #[diagnostic(code(trellis::config))]
    ConfigParse(String),

    #[error("Missing configuration file: {}", .0.display())]
    #[diagnostic(code(trellis::config))]
    MissingConfigFile(PathBuf),
}
