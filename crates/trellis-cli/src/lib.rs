//! CLI logic for the Trellis diagram tool.
//!
//! This module contains the core CLI logic for the Trellis diagram tool.

mod args;
mod config;
mod error;
mod input;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use trellis::ScriptBuilder;

/// Run the Trellis CLI application
///
/// This function loads the declaration input, generates the PlantUML
/// script, and writes it to the output file (or stdout).
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Declaration input parsing errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Generating diagram script"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Load the declaration input
    let declarations = input::load_declarations(&args.input)?;

    // Generate the script using the ScriptBuilder API
    let builder = ScriptBuilder::new(app_config);
    let script = builder.generate(&declarations);

    let output_text = if args.encoded {
        script.encoded_text()
    } else {
        script.into_text()
    };

    if args.stdout {
        println!("{output_text}");
    } else {
        fs::write(&args.output, output_text)?;
        info!(output_file = args.output; "Script exported successfully");
    }

    Ok(())
}
