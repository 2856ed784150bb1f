//! Trellis - PlantUML class-diagram script generation for parsed declarations.
//!
//! Trellis turns an ordered sequence of parsed source-code declarations
//! (classes, structs, enums, protocols, extensions) into a PlantUML script
//! string. Declarations can optionally be grouped into nested `rectangle`
//! containers, and extensions can be merged into the types they extend.

pub mod config;

mod context;
mod encode;
mod rectangle;
mod registry;
mod render;
mod script;
mod text;
mod transform;

pub use trellis_core::{Declaration, DeclarationKind, Member, RectangleSpec};

pub use registry::EntryRegistry;
pub use script::Script;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for generating PlantUML scripts from parsed declarations.
///
/// One builder holds the configuration and can generate any number of
/// scripts; every [`generate`](Self::generate) call runs a fresh,
/// single-pass assembly with its own entry registry.
///
/// # Examples
///
/// ```rust
/// use trellis::{ScriptBuilder, config::AppConfig};
/// use trellis_core::{Declaration, DeclarationKind};
///
/// let declarations = vec![
///     Declaration::with_members(DeclarationKind::Class, "Session", vec![]),
/// ];
///
/// let builder = ScriptBuilder::new(AppConfig::default());
/// let script = builder.generate(&declarations);
///
/// assert!(script.text().starts_with("@startuml"));
/// assert!(script.text().contains("class \"Session\" as Session"));
/// ```
#[derive(Default)]
pub struct ScriptBuilder {
    config: AppConfig,
}

impl ScriptBuilder {
    /// Create a new script builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Generate a PlantUML script for an ordered declaration sequence.
    ///
    /// The declaration pre-processing pipeline runs first (nested-type
    /// population, protocols-first-extensions-last ordering, optional
    /// extension merging), then the script is assembled in one pass.
    /// Generation never fails: declarations without a renderable form and
    /// absent configuration simply contribute nothing to the output.
    pub fn generate(&self, declarations: &[Declaration]) -> Script {
        info!(declaration_count = declarations.len(); "Generating PlantUML script");

        let mut adjusted = declarations.to_vec();

        if self.config.elements().show_nested_types() {
            adjusted = transform::populate_nested_types(&adjusted);
        }

        adjusted = transform::order_declarations(&adjusted);

        if self.config.merge_extensions() {
            adjusted = transform::merge_extensions(
                &adjusted,
                self.config.elements().merged_extension_member_indicator(),
            );
        }

        debug!(adjusted_count = adjusted.len(); "Declaration pre-processing complete");

        let script = Script::build(&adjusted, &self.config);

        debug!("Script generated successfully");
        trace!(script = script.text(); "Assembled script");

        script
    }
}
