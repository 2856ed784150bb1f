//! Example: Generating a script from the declaration model
//!
//! This example demonstrates how to programmatically build declarations
//! and generate a PlantUML script, without going through serialized
//! parser output.

use trellis::{ScriptBuilder, config::AppConfig};
use trellis_core::{
    AccessLevel, Declaration, DeclarationKind, Member, MemberKind, RectangleSpec,
};

fn main() {
    println!("Building declarations...\n");

    // A protocol with one requirement
    let cache_protocol = Declaration::with_members(
        DeclarationKind::Protocol,
        "Cache",
        vec![Member::method("get(key:)")],
    );

    // A class conforming to the protocol
    let session_store = Declaration::new(
        DeclarationKind::Class,
        "SessionStore",
        vec!["Cache".to_string()],
        vec![
            Member::new(
                "shared",
                MemberKind::Property,
                AccessLevel::Public,
                true,
                Some("SessionStore".to_string()),
            ),
            Member::property("entries", Some("[String: Session]".to_string())),
            Member::method("get(key:)"),
        ],
        vec![],
    );

    // A plain value type
    let session = Declaration::with_members(
        DeclarationKind::Struct,
        "Session",
        vec![Member::property("id", Some("UUID".to_string()))],
    );

    let declarations = vec![cache_protocol, session_store, session];

    // Group the storage types into one rectangle; the protocol stays at
    // top level.
    let storage = RectangleSpec::new(
        "Storage",
        Some(vec!["SessionStore".to_string(), "Session".to_string()]),
        None,
    );
    let config = AppConfig::with_rectangles(vec![storage]);

    println!("Generating script...\n");
    let builder = ScriptBuilder::new(config);
    let script = builder.generate(&declarations);

    println!("{}", script.text());
    println!();
    println!("Server URL form: ~h encoding, {} chars", script.encoded_text().len());
}
