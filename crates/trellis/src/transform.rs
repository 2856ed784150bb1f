//! Declaration pre-processing pipeline.
//!
//! Three pure transformations run over the declaration sequence before
//! rendering, in this order:
//!
//! 1. [`populate_nested_types`] - hoist nested declarations as stand-alone
//!    `Outer.Inner` entries.
//! 2. [`order_declarations`] - stable reorder: protocols first, extensions
//!    last.
//! 3. [`merge_extensions`] - fold extension members into their base
//!    declaration, marked with the configured indicator.
//!
//! Apart from the explicit reordering, every transformation preserves the
//! relative order of the sequence it receives.

use indexmap::IndexMap;

use trellis_core::{Declaration, DeclarationKind};

/// Splice each declaration's nested declarations into the sequence as
/// stand-alone entries named `Outer.Inner`, directly after their parent.
///
/// Hoisting recurses, so `Outer.Inner.Leaf` appears for doubly nested
/// types.
pub(crate) fn populate_nested_types(items: &[Declaration]) -> Vec<Declaration> {
    let mut populated = Vec::new();
    for item in items {
        push_with_nested(item.clone(), &mut populated);
    }
    populated
}

fn push_with_nested(item: Declaration, out: &mut Vec<Declaration>) {
    let parent_name = item.name().to_owned();
    let nested = item.nested().to_vec();
    out.push(item);
    for child in nested {
        let qualified = format!("{parent_name}.{}", child.name());
        push_with_nested(child.renamed(qualified), out);
    }
}

/// Stable reorder: protocols first, extensions last, everything else in
/// between. Relative order within each group is unchanged.
pub(crate) fn order_declarations(items: &[Declaration]) -> Vec<Declaration> {
    let mut ordered = Vec::with_capacity(items.len());
    ordered.extend(
        items
            .iter()
            .filter(|item| item.kind() == DeclarationKind::Protocol)
            .cloned(),
    );
    ordered.extend(
        items
            .iter()
            .filter(|item| {
                item.kind() != DeclarationKind::Protocol
                    && item.kind() != DeclarationKind::Extension
            })
            .cloned(),
    );
    ordered.extend(
        items
            .iter()
            .filter(|item| item.kind() == DeclarationKind::Extension)
            .cloned(),
    );
    ordered
}

/// Fold each extension of a previously seen base declaration into that
/// declaration's member list.
///
/// Merged members have ` <indicator>` appended to their names when an
/// indicator is configured. Extensions of types not present in the
/// sequence stay stand-alone. Expected to run after
/// [`order_declarations`], so bases precede their extensions.
pub(crate) fn merge_extensions(items: &[Declaration], indicator: Option<&str>) -> Vec<Declaration> {
    let mut merged: Vec<Declaration> = Vec::with_capacity(items.len());
    let mut base_index: IndexMap<String, usize> = IndexMap::new();

    for item in items {
        if item.kind() == DeclarationKind::Extension {
            if let Some(&index) = base_index.get(item.name()) {
                let extra: Vec<_> = item
                    .members()
                    .iter()
                    .map(|member| match indicator {
                        Some(indicator) => member.with_name_suffix(indicator),
                        None => member.clone(),
                    })
                    .collect();
                let updated = merged[index].with_appended_members(extra);
                merged[index] = updated;
                continue;
            }
            merged.push(item.clone());
        } else {
            if item.kind().is_renderable() {
                base_index
                    .entry(item.name().to_owned())
                    .or_insert(merged.len());
            }
            merged.push(item.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use trellis_core::Member;

    use super::*;

    fn declaration(kind: DeclarationKind, name: &str) -> Declaration {
        Declaration::with_members(kind, name, vec![])
    }

    #[test]
    fn test_populate_nested_types_hoists_recursively() {
        let leaf = declaration(DeclarationKind::Enum, "Leaf");
        let inner = Declaration::new(
            DeclarationKind::Struct,
            "Inner",
            vec![],
            vec![],
            vec![leaf],
        );
        let outer = Declaration::new(
            DeclarationKind::Class,
            "Outer",
            vec![],
            vec![],
            vec![inner],
        );

        let populated = populate_nested_types(&[outer]);
        let names: Vec<&str> = populated.iter().map(Declaration::name).collect();
        assert_eq!(names, ["Outer", "Outer.Inner", "Outer.Inner.Leaf"]);
    }

    #[test]
    fn test_populate_without_nested_is_identity() {
        let items = [
            declaration(DeclarationKind::Class, "A"),
            declaration(DeclarationKind::Struct, "B"),
        ];
        assert_eq!(populate_nested_types(&items), items);
    }

    #[test]
    fn test_order_protocols_first_extensions_last() {
        let items = [
            declaration(DeclarationKind::Extension, "E1"),
            declaration(DeclarationKind::Class, "C1"),
            declaration(DeclarationKind::Protocol, "P1"),
            declaration(DeclarationKind::Extension, "E2"),
            declaration(DeclarationKind::Protocol, "P2"),
            declaration(DeclarationKind::Struct, "S1"),
        ];

        let ordered = order_declarations(&items);
        let names: Vec<&str> = ordered.iter().map(Declaration::name).collect();
        assert_eq!(names, ["P1", "P2", "C1", "S1", "E1", "E2"]);
    }

    #[test]
    fn test_merge_extension_into_base_with_indicator() {
        let base = Declaration::with_members(
            DeclarationKind::Struct,
            "Point",
            vec![Member::property("x", Some("Double".into()))],
        );
        let extension = Declaration::with_members(
            DeclarationKind::Extension,
            "Point",
            vec![Member::method("flipped()")],
        );

        let merged = merge_extensions(&[base, extension], Some("<&bolt>"));
        assert_eq!(merged.len(), 1);

        let members: Vec<&str> = merged[0].members().iter().map(Member::name).collect();
        assert_eq!(members, ["x", "flipped() <&bolt>"]);
    }

    #[test]
    fn test_merge_without_indicator_keeps_member_names() {
        let base = declaration(DeclarationKind::Class, "Foo");
        let extension = Declaration::with_members(
            DeclarationKind::Extension,
            "Foo",
            vec![Member::method("bar()")],
        );

        let merged = merge_extensions(&[base, extension], None);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].members()[0].name(), "bar()");
    }

    #[test]
    fn test_orphan_extension_stays_standalone() {
        let extension = Declaration::with_members(
            DeclarationKind::Extension,
            "String",
            vec![Member::method("trimmed()")],
        );

        let merged = merge_extensions(&[extension.clone()], Some("<&bolt>"));
        assert_eq!(merged, [extension]);
    }

    #[test]
    fn test_two_extensions_merge_in_order() {
        let base = declaration(DeclarationKind::Class, "Foo");
        let first = Declaration::with_members(
            DeclarationKind::Extension,
            "Foo",
            vec![Member::method("a()")],
        );
        let second = Declaration::with_members(
            DeclarationKind::Extension,
            "Foo",
            vec![Member::method("b()")],
        );

        let merged = merge_extensions(&[base, first, second], None);
        assert_eq!(merged.len(), 1);

        let members: Vec<&str> = merged[0].members().iter().map(Member::name).collect();
        assert_eq!(members, ["a()", "b()"]);
    }
}
