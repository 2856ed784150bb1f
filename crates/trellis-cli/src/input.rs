//! Declaration input loading.
//!
//! Declarations reach the tool as the serialized output of an external
//! source parser: a JSON array of declaration objects. Parsing source
//! code is someone else's job.

use std::{fs, path::Path};

use log::debug;

use trellis_core::Declaration;

use crate::error::CliError;

/// Load an ordered declaration sequence from a JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not contain a
/// JSON array of declaration objects.
pub fn load_declarations(path: impl AsRef<Path>) -> Result<Vec<Declaration>, CliError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let declarations: Vec<Declaration> = serde_json::from_str(&content)?;

    debug!(
        path = path.display().to_string(),
        declaration_count = declarations.len();
        "Declarations loaded"
    );

    Ok(declarations)
}
