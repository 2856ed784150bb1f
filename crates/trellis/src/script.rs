//! Script assembly.
//!
//! [`Script`] is the final PlantUML document (`@startuml ... @enduml`),
//! assembled in one append-only pass: header directives, style block,
//! declaration content (grouped into rectangles when configured),
//! connection lines, footer. Nothing here fails: absent configuration or
//! unrenderable declarations simply emit nothing.

use log::{debug, trace};

use trellis_core::Declaration;

use crate::{
    config::AppConfig,
    context::RenderContext,
    encode,
    rectangle::render_rectangles,
    registry::EntryRegistry,
    render::render_declaration,
    text::append_line,
};

/// A complete PlantUML script.
///
/// Built by [`ScriptBuilder::generate`](crate::ScriptBuilder::generate);
/// the document text is append-only during assembly and immutable after.
#[derive(Debug, Clone)]
pub struct Script {
    text: String,
}

impl Script {
    /// Assemble the script for an already pre-processed declaration
    /// sequence. The sequence order is preserved exactly.
    pub(crate) fn build(items: &[Declaration], config: &AppConfig) -> Self {
        let mut context = RenderContext::new();

        let mut text = String::from("@startuml");
        if let Some(theme) = config.theme() {
            append_line(&mut text, &format!("!theme {theme}"));
        }
        if let Some(url) = config.include_remote_url() {
            append_line(&mut text, &format!("!include {url}"));
        }
        let styling = style_block(config);
        if !styling.is_empty() {
            append_line(&mut text, &styling);
        }
        if let Some(title) = config.title() {
            append_line(&mut text, &format!("title {title}"));
        }

        let mut main_content = String::from("\n");

        if let Some(rectangles) = config.rectangles() {
            let mut registry = EntryRegistry::new();
            for item in items {
                if let Some(block) = process_declaration(item, &mut context) {
                    registry.append(item.name(), block);
                }
            }
            debug!(entry_count = registry.len(); "Registry populated");

            let rectangles_text = render_rectangles(rectangles, &mut registry);
            if !rectangles_text.is_empty() {
                append_line(&mut main_content, &rectangles_text);
            }

            trace!(unclaimed_count = registry.len(); "Rectangles resolved");
            for line in registry.remaining_in_order() {
                append_line(&mut main_content, &line);
            }
        } else {
            for item in items {
                if let Some(block) = process_declaration(item, &mut context) {
                    append_line(&mut main_content, &block);
                }
            }
        }

        context.collect_nested_connections(items);

        let definitions = format!(
            "{main_content}\n{}\n{}",
            context.connections().join("\n"),
            context.extension_connections().join("\n")
        );
        append_line(&mut text, &definitions);
        append_line(&mut text, "@enduml");

        Self { text }
    }

    /// The textual representation of the script.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the script, returning the document text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Encode the script for the PlantUML server's text-encoding URL form.
    ///
    /// Uses the hex variant: `~h` followed by the lowercase hex encoding
    /// of the UTF-8 document bytes.
    pub fn encoded_text(&self) -> String {
        encode::encode_hex(&self.text)
    }
}

/// Render one declaration, skipping kinds that do not participate in
/// class diagrams.
fn process_declaration(item: &Declaration, context: &mut RenderContext) -> Option<String> {
    if !item.kind().is_renderable() {
        return None;
    }
    render_declaration(item, context)
}

/// The `' STYLE START` / `' STYLE END` block, or an empty string when
/// both command lists are configured empty.
fn style_block(config: &AppConfig) -> String {
    let hide_show_commands = config.hide_show_commands();
    let skinparam_commands = config.skinparam_commands();

    if hide_show_commands.is_empty() && skinparam_commands.is_empty() {
        return String::new();
    }

    format!(
        "' STYLE START\n{}\n{}\n' STYLE END",
        hide_show_commands.join("\n"),
        skinparam_commands.join("\n")
    )
}
