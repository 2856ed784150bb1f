//! Parsed declaration types.
//!
//! This module contains the input model for script generation:
//! - [`Declaration`] - A top-level (or nested) source-code declaration.
//! - [`Member`] - A property, method, or enum case belonging to a declaration.
//! - [`DeclarationKind`] - Closed set of declaration kinds.
//! - [`AccessLevel`] - Source access level, mapped to PlantUML visibility.
//!
//! Declarations arrive as data from an external parser; all types here
//! deserialize from its serialized output and are never mutated by the
//! generator itself (the transform pipeline produces adjusted copies).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// The kind of a parsed declaration.
///
/// Only the first five kinds are renderable in a class diagram; anything
/// else a parser may report (operators, typealiases, globals) maps to
/// `Other` and is skipped during script generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Struct,
    Enum,
    Protocol,
    Extension,
    /// Any kind that does not participate in class diagrams.
    #[default]
    #[serde(other)]
    Other,
}

impl DeclarationKind {
    /// Whether declarations of this kind appear in a class diagram.
    pub fn is_renderable(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl FromStr for DeclarationKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "struct" => Ok(Self::Struct),
            "enum" => Ok(Self::Enum),
            "protocol" => Ok(Self::Protocol),
            "extension" => Ok(Self::Extension),
            "other" => Ok(Self::Other),
            _ => Err("Unsupported declaration kind"),
        }
    }
}

impl From<DeclarationKind> for &'static str {
    fn from(val: DeclarationKind) -> Self {
        match val {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Extension => "extension",
            DeclarationKind::Other => "other",
        }
    }
}

impl Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Source access level of a member.
///
/// The level determines the PlantUML visibility symbol placed before the
/// member name: `+` for open/public, `~` for internal, `-` for
/// fileprivate/private.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Open,
    Public,
    #[default]
    Internal,
    Fileprivate,
    Private,
}

impl AccessLevel {
    /// The PlantUML visibility symbol for this access level.
    pub fn symbol(self) -> char {
        match self {
            Self::Open | Self::Public => '+',
            Self::Internal => '~',
            Self::Fileprivate | Self::Private => '-',
        }
    }
}

/// The kind of a declaration member.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    #[default]
    Property,
    Method,
    Case,
}

/// A single member of a declaration: a property, method, or enum case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Member {
    name: String,

    #[serde(default)]
    kind: MemberKind,

    #[serde(default)]
    access: AccessLevel,

    /// Whether the member is declared `static` (or `class`).
    #[serde(default)]
    is_static: bool,

    /// Declared type for properties, e.g. `Int` in `var count: Int`.
    #[serde(default)]
    type_annotation: Option<String>,
}

impl Member {
    /// Create a new member.
    pub fn new(
        name: impl Into<String>,
        kind: MemberKind,
        access: AccessLevel,
        is_static: bool,
        type_annotation: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            access,
            is_static,
            type_annotation,
        }
    }

    /// Convenience constructor for an internal instance property.
    pub fn property(name: impl Into<String>, type_annotation: Option<String>) -> Self {
        Self::new(
            name,
            MemberKind::Property,
            AccessLevel::default(),
            false,
            type_annotation,
        )
    }

    /// Convenience constructor for an internal instance method.
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method, AccessLevel::default(), false, None)
    }

    /// Convenience constructor for an enum case.
    pub fn case(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Case, AccessLevel::default(), false, None)
    }

    /// Get the member name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the member kind.
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Get the member access level.
    pub fn access(&self) -> AccessLevel {
        self.access
    }

    /// Whether the member is static.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Get the declared type annotation, if any.
    pub fn type_annotation(&self) -> Option<&str> {
        self.type_annotation.as_deref()
    }

    /// Return a copy of this member with a suffix appended to its name.
    ///
    /// Used when extension members are merged into their base declaration
    /// and marked with the configured indicator.
    pub fn with_name_suffix(&self, suffix: &str) -> Self {
        let mut member = self.clone();
        member.name = format!("{} {}", member.name, suffix);
        member
    }
}

/// A parsed source-code declaration eligible for diagram rendering.
///
/// Declarations form an ordered sequence; the order is significant and is
/// preserved by every stage of script generation except the explicit
/// protocols-first-extensions-last reordering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Declaration {
    kind: DeclarationKind,
    name: String,

    /// Names of inherited types (superclasses and adopted protocols).
    #[serde(default)]
    inherited_types: Vec<String>,

    #[serde(default)]
    members: Vec<Member>,

    /// Declarations nested inside this one, in source order.
    #[serde(default)]
    nested: Vec<Declaration>,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(
        kind: DeclarationKind,
        name: impl Into<String>,
        inherited_types: Vec<String>,
        members: Vec<Member>,
        nested: Vec<Declaration>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            inherited_types,
            members,
            nested,
        }
    }

    /// Convenience constructor for a declaration with members only.
    pub fn with_members(
        kind: DeclarationKind,
        name: impl Into<String>,
        members: Vec<Member>,
    ) -> Self {
        Self::new(kind, name, Vec::new(), members, Vec::new())
    }

    /// Get the declaration kind.
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Get the declaration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the names of inherited types.
    pub fn inherited_types(&self) -> &[String] {
        &self.inherited_types
    }

    /// Borrow the declaration members.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Borrow the nested declarations.
    pub fn nested(&self) -> &[Declaration] {
        &self.nested
    }

    /// Return a copy of this declaration under a different name.
    ///
    /// Nested-type population uses this to hoist `Inner` out of `Outer`
    /// as a stand-alone `Outer.Inner` declaration.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        let mut declaration = self.clone();
        declaration.name = name.into();
        declaration
    }

    /// Return a copy of this declaration with extra members appended.
    pub fn with_appended_members(&self, extra: impl IntoIterator<Item = Member>) -> Self {
        let mut declaration = self.clone();
        declaration.members.extend(extra);
        declaration
    }
}
