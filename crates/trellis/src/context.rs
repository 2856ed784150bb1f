//! Shared rendering context.
//!
//! The context accumulates everything rendering produces besides the
//! declaration blocks themselves: inheritance connection lines, extension
//! and nested-type connection lines, and the alias bookkeeping that keeps
//! PlantUML identifiers unique when several declarations share a name
//! (typically a type and its extensions).

use std::collections::HashMap;

use trellis_core::Declaration;

/// Mutable state threaded through one script build.
///
/// Connection lines are consumed at the end of assembly, after all
/// declaration content: first the declaration connections (inheritance),
/// then the extension and nested-type connections.
#[derive(Debug, Default)]
pub(crate) struct RenderContext {
    connections: Vec<String>,
    extension_connections: Vec<String>,
    seen_names: HashMap<String, usize>,
}

impl RenderContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return a unique PlantUML alias for `name`.
    ///
    /// The first occurrence keeps the name itself; the n-th repeat becomes
    /// `<name><n>` (`Foo`, `Foo1`, `Foo2`, ...).
    pub(crate) fn unique_alias(&mut self, name: &str) -> String {
        let count = self.seen_names.entry(name.to_owned()).or_insert(0);
        let alias = if *count == 0 {
            name.to_owned()
        } else {
            format!("{name}{count}")
        };
        *count += 1;
        alias
    }

    /// Whether `name` has already been emitted under its own alias.
    pub(crate) fn has_seen(&self, name: &str) -> bool {
        self.seen_names.contains_key(name)
    }

    /// Record an inheritance connection from `alias` to each inherited type.
    pub(crate) fn add_inheritance(&mut self, alias: &str, inherited_types: &[String]) {
        for parent in inherited_types {
            self.connections.push(format!("{parent} <|-- {alias}"));
        }
    }

    /// Record an extension connection between a base type and an
    /// extension emitted under a distinct alias.
    pub(crate) fn add_extension(&mut self, base: &str, alias: &str) {
        self.extension_connections
            .push(format!("{base} <.. {alias} : ext"));
    }

    /// Record composition connections for hoisted nested types.
    ///
    /// For every declaration named `Outer.Inner` whose parent `Outer` was
    /// itself emitted, a `Outer +-- Outer.Inner` line is added.
    pub(crate) fn collect_nested_connections(&mut self, items: &[Declaration]) {
        for item in items {
            let Some((outer, _)) = item.name().rsplit_once('.') else {
                continue;
            };
            if self.has_seen(outer) {
                self.extension_connections
                    .push(format!("{outer} +-- {}", item.name()));
            }
        }
    }

    pub(crate) fn connections(&self) -> &[String] {
        &self.connections
    }

    pub(crate) fn extension_connections(&self) -> &[String] {
        &self.extension_connections
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::DeclarationKind;

    use super::*;

    #[test]
    fn test_unique_alias_numbering() {
        let mut context = RenderContext::new();
        assert_eq!(context.unique_alias("Foo"), "Foo");
        assert_eq!(context.unique_alias("Foo"), "Foo1");
        assert_eq!(context.unique_alias("Foo"), "Foo2");
        assert_eq!(context.unique_alias("Bar"), "Bar");
    }

    #[test]
    fn test_inheritance_connections_in_order() {
        let mut context = RenderContext::new();
        context.add_inheritance("Sub", &["Base".to_string(), "Proto".to_string()]);
        assert_eq!(context.connections(), ["Base <|-- Sub", "Proto <|-- Sub"]);
    }

    #[test]
    fn test_nested_connections_only_for_seen_parents() {
        let mut context = RenderContext::new();
        context.unique_alias("Outer");

        let items = [
            Declaration::with_members(DeclarationKind::Struct, "Outer.Inner", vec![]),
            Declaration::with_members(DeclarationKind::Struct, "Orphan.Inner", vec![]),
        ];
        context.collect_nested_connections(&items);

        assert_eq!(context.extension_connections(), ["Outer +-- Outer.Inner"]);
    }
}
