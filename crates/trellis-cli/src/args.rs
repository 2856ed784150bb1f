//! Command-line argument definitions for the Trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, output form, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Trellis diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the declaration input file (JSON)
    #[arg(help = "Path to the declaration input file")]
    pub input: String,

    /// Path to the output PlantUML file
    #[arg(short, long, default_value = "out.puml")]
    pub output: String,

    /// Write the script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Write the PlantUML-server encoded form instead of plain text
    #[arg(long)]
    pub encoded: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
