//! Rectangle tree resolution.
//!
//! This module renders a forest of [`RectangleSpec`] nodes into the nested
//! `rectangle "<name>" { ... }` block of the script, claiming rendered
//! declarations out of the [`EntryRegistry`] as it goes. Claimed entries
//! are removed from the registry, which is what enforces the at-most-once
//! emission invariant: an entry swallowed by a nested rectangle is no
//! longer visible to its ancestors or to the top-level fallback.

use log::trace;

use trellis_core::RectangleSpec;

use crate::{
    registry::EntryRegistry,
    text::{append_line, indent_block},
};

/// Render a forest of rectangle specs, claiming matching entries from the
/// registry.
///
/// Sibling rectangles are rendered in order and joined by single newlines.
/// Within one rectangle, child rectangles resolve before the rectangle's
/// own member claims, so children get first pick of contested names; the
/// member-claim step then scans whatever is still left in the registry.
/// A rectangle with no children and no matching members still renders its
/// open/close pair.
pub(crate) fn render_rectangles(specs: &[RectangleSpec], registry: &mut EntryRegistry) -> String {
    let mut rectangles_text = String::new();

    for spec in specs {
        append_line(&mut rectangles_text, &format!("rectangle \"{}\" {{", spec.name()));

        if let Some(children) = spec.children() {
            let children_text = render_rectangles(children, registry);
            if !children_text.is_empty() {
                append_line(&mut rectangles_text, &indent_block(&children_text));
            }
        }

        if let Some(members) = spec.members() {
            // The registry shrinks while claiming, so collect the names
            // that currently match before removing any of them.
            let matching: Vec<String> = registry
                .names()
                .filter(|name| members.iter().any(|member| member == name))
                .map(str::to_owned)
                .collect();

            for name in matching {
                if let Some(line) = registry.claim(&name) {
                    trace!(rectangle = spec.name(), entry = name.as_str(); "Claimed entry");
                    append_line(&mut rectangles_text, &indent_block(&line));
                }
            }
        }

        append_line(&mut rectangles_text, "}");
    }

    rectangles_text
}
