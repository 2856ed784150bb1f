//! Per-declaration PlantUML rendering.
//!
//! Each renderable declaration becomes one text block: a head line with
//! the PlantUML keyword, quoted display name, unique alias, and (for
//! structs, enums, and extensions) a spot stereotype, followed by the
//! member lines and a closing brace. Inheritance and extension
//! relationships are recorded on the [`RenderContext`] as a side effect
//! and emitted at the end of the script.

use std::fmt::Write as _;

use trellis_core::{Declaration, DeclarationKind, Member, MemberKind};

use crate::{context::RenderContext, text::INDENT};

/// Render one declaration to its PlantUML block.
///
/// Returns `None` for kinds that do not participate in class diagrams;
/// nothing is recorded on the context in that case.
pub(crate) fn render_declaration(
    declaration: &Declaration,
    context: &mut RenderContext,
) -> Option<String> {
    let (keyword, stereotype) = match declaration.kind() {
        DeclarationKind::Class => ("class", None),
        DeclarationKind::Struct => ("class", Some("<< (S, SkyBlue) struct >>")),
        DeclarationKind::Enum => ("class", Some("<< (E, LightSteelBlue) enum >>")),
        DeclarationKind::Protocol => ("protocol", None),
        DeclarationKind::Extension => ("class", Some("<< (X, Orchid) extension >>")),
        DeclarationKind::Other => return None,
    };

    let name = declaration.name();
    let is_extension = declaration.kind() == DeclarationKind::Extension;
    let extends_known_type = is_extension && context.has_seen(name);
    let alias = context.unique_alias(name);

    let mut block = format!("{keyword} \"{name}\" as {alias}");
    if let Some(stereotype) = stereotype {
        write!(block, " {stereotype}").expect("writing to a String cannot fail");
    }
    block.push_str(" {");

    for member in declaration.members() {
        block.push('\n');
        block.push_str(INDENT);
        block.push_str(&member_line(member));
    }
    block.push_str("\n}");

    context.add_inheritance(&alias, declaration.inherited_types());
    if extends_known_type {
        context.add_extension(name, &alias);
    }

    Some(block)
}

/// Render one member line.
///
/// Properties and methods carry the visibility symbol of their access
/// level and an optional `{static}` modifier; enum cases are emitted as
/// the bare case name.
fn member_line(member: &Member) -> String {
    if member.kind() == MemberKind::Case {
        return member.name().to_owned();
    }

    let mut line = String::new();
    if member.is_static() {
        line.push_str("{static} ");
    }
    line.push(member.access().symbol());
    line.push_str(member.name());
    if let Some(annotation) = member.type_annotation() {
        write!(line, " : {annotation}").expect("writing to a String cannot fail");
    }
    line
}
