//! Core types and definitions for Trellis diagrams.
//!
//! This crate contains the data model shared by the Trellis engine and CLI:
//!
//! - [`declaration`] - Parsed source-code declarations (classes, structs,
//!   enums, protocols, extensions) and their members.
//! - [`rectangle`] - User-authored grouping configuration for nesting
//!   declarations inside named diagram rectangles.
//!
//! All types are plain data: they are produced by an external parser (or
//! deserialized from its output) and consumed by the script generator
//! without further mutation.

pub mod declaration;
pub mod rectangle;

pub use declaration::{AccessLevel, Declaration, DeclarationKind, Member, MemberKind};
pub use rectangle::RectangleSpec;
