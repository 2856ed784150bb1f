//! Configuration types for Trellis script generation.
//!
//! This module provides the configuration structures that control script
//! output. All types implement [`serde::Deserialize`] for loading from
//! external sources (the CLI loads them from TOML).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration: header directives, style
//!   commands, element options, and the optional rectangle forest.
//! - [`ElementOptions`] - Options controlling how declarations are
//!   pre-processed before emission.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.theme().is_none());
//! assert!(!config.hide_show_commands().is_empty());
//! ```

use serde::Deserialize;

use trellis_core::RectangleSpec;

/// Hide/show commands emitted when none are configured.
const DEFAULT_HIDE_SHOW_COMMANDS: &[&str] = &["hide empty members"];

/// Skinparam commands emitted when none are configured.
const DEFAULT_SKINPARAM_COMMANDS: &[&str] = &["skinparam shadowing false"];

/// Top-level configuration for one script build.
///
/// Every field is optional in the serialized form; an absent option never
/// causes an error, it only omits the corresponding output line or block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// PlantUML theme name, emitted as `!theme <name>`.
    #[serde(default)]
    theme: Option<String>,

    /// Remote include URL, emitted as `!include <url>`.
    #[serde(default)]
    include_remote_url: Option<String>,

    /// Diagram title, emitted as `title <title>`.
    #[serde(default)]
    title: Option<String>,

    /// Hide/show commands for the style block. `None` falls back to
    /// `hide empty members`; an explicitly empty list emits nothing.
    #[serde(default)]
    hide_show_commands: Option<Vec<String>>,

    /// Skinparam commands for the style block. `None` falls back to
    /// `skinparam shadowing false`; an explicitly empty list emits nothing.
    #[serde(default)]
    skinparam_commands: Option<Vec<String>>,

    /// Element pre-processing options.
    #[serde(default)]
    elements: ElementOptions,

    /// Whether extensions are merged into their base declarations.
    #[serde(default)]
    merge_extensions: bool,

    /// Rectangle grouping forest. `None` disables rectangle grouping.
    #[serde(default)]
    rectangles: Option<Vec<RectangleSpec>>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with every option specified.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        theme: Option<String>,
        include_remote_url: Option<String>,
        title: Option<String>,
        hide_show_commands: Option<Vec<String>>,
        skinparam_commands: Option<Vec<String>>,
        elements: ElementOptions,
        merge_extensions: bool,
        rectangles: Option<Vec<RectangleSpec>>,
    ) -> Self {
        Self {
            theme,
            include_remote_url,
            title,
            hide_show_commands,
            skinparam_commands,
            elements,
            merge_extensions,
            rectangles,
        }
    }

    /// Creates a default configuration with the given rectangle forest.
    pub fn with_rectangles(rectangles: Vec<RectangleSpec>) -> Self {
        Self {
            rectangles: Some(rectangles),
            ..Self::default()
        }
    }

    /// Returns the configured theme, if any.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Returns the remote include URL, if any.
    pub fn include_remote_url(&self) -> Option<&str> {
        self.include_remote_url.as_deref()
    }

    /// Returns the diagram title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the hide/show commands for the style block.
    pub fn hide_show_commands(&self) -> Vec<String> {
        match &self.hide_show_commands {
            Some(commands) => commands.clone(),
            None => DEFAULT_HIDE_SHOW_COMMANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Returns the skinparam commands for the style block.
    pub fn skinparam_commands(&self) -> Vec<String> {
        match &self.skinparam_commands {
            Some(commands) => commands.clone(),
            None => DEFAULT_SKINPARAM_COMMANDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Returns the element pre-processing options.
    pub fn elements(&self) -> &ElementOptions {
        &self.elements
    }

    /// Whether extensions are merged into their base declarations.
    pub fn merge_extensions(&self) -> bool {
        self.merge_extensions
    }

    /// Returns the rectangle grouping forest, if configured.
    pub fn rectangles(&self) -> Option<&[RectangleSpec]> {
        self.rectangles.as_deref()
    }
}

/// Options controlling declaration pre-processing.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementOptions {
    /// Whether nested declarations are hoisted as `Outer.Inner` entries.
    #[serde(default = "default_show_nested_types")]
    show_nested_types: bool,

    /// Indicator appended to member names merged in from extensions.
    #[serde(default = "default_merged_extension_member_indicator")]
    merged_extension_member_indicator: Option<String>,
}

impl Default for ElementOptions {
    fn default() -> Self {
        Self {
            show_nested_types: default_show_nested_types(),
            merged_extension_member_indicator: default_merged_extension_member_indicator(),
        }
    }
}

impl ElementOptions {
    /// Creates new element options.
    pub fn new(
        show_nested_types: bool,
        merged_extension_member_indicator: Option<String>,
    ) -> Self {
        Self {
            show_nested_types,
            merged_extension_member_indicator,
        }
    }

    /// Whether nested declarations are shown as stand-alone entries.
    pub fn show_nested_types(&self) -> bool {
        self.show_nested_types
    }

    /// The indicator appended to merged extension members, if any.
    pub fn merged_extension_member_indicator(&self) -> Option<&str> {
        self.merged_extension_member_indicator.as_deref()
    }
}

fn default_show_nested_types() -> bool {
    true
}

fn default_merged_extension_member_indicator() -> Option<String> {
    Some("<&bolt>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_commands() {
        let config = AppConfig::default();
        assert_eq!(config.hide_show_commands(), ["hide empty members"]);
        assert_eq!(config.skinparam_commands(), ["skinparam shadowing false"]);
    }

    #[test]
    fn test_default_element_options() {
        let options = ElementOptions::default();
        assert!(options.show_nested_types());
        assert_eq!(options.merged_extension_member_indicator(), Some("<&bolt>"));
    }

    #[test]
    fn test_absent_options_deserialize_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").expect("Failed to deserialize config");
        assert!(config.theme().is_none());
        assert!(config.title().is_none());
        assert!(!config.merge_extensions());
        assert!(config.rectangles().is_none());
        assert!(config.elements().show_nested_types());
    }

    #[test]
    fn test_explicitly_empty_command_lists_stay_empty() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "hide_show_commands": [], "skinparam_commands": [] }"#)
                .expect("Failed to deserialize config");
        assert!(config.hide_show_commands().is_empty());
        assert!(config.skinparam_commands().is_empty());
    }
}
