//! Rectangle grouping configuration.

use serde::{Deserialize, Serialize};

/// A node in the user-authored rectangle grouping configuration.
///
/// A rectangle is a named visual container in the generated diagram. It may
/// directly claim declarations by name through `members`, and it may nest
/// further rectangles through `children`. Child rectangles are resolved
/// before the rectangle's own member claims, so a name listed both in a
/// child and in its parent ends up inside the child.
///
/// Rectangle specs are immutable input configuration: they form a tree (no
/// ownership cycles) and are never mutated during script assembly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RectangleSpec {
    name: String,

    /// Names of declarations this rectangle directly contains.
    #[serde(default)]
    members: Option<Vec<String>>,

    /// Nested rectangles, rendered before member claims at this level.
    #[serde(default)]
    children: Option<Vec<RectangleSpec>>,
}

impl RectangleSpec {
    /// Create a new rectangle spec.
    pub fn new(
        name: impl Into<String>,
        members: Option<Vec<String>>,
        children: Option<Vec<RectangleSpec>>,
    ) -> Self {
        Self {
            name: name.into(),
            members,
            children,
        }
    }

    /// Get the rectangle label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the member names claimed by this rectangle, if any.
    pub fn members(&self) -> Option<&[String]> {
        self.members.as_deref()
    }

    /// Borrow the nested rectangles, if any.
    pub fn children(&self) -> Option<&[RectangleSpec]> {
        self.children.as_deref()
    }
}
