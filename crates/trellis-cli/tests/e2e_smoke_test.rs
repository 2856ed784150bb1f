use std::fs;

use tempfile::tempdir;

use trellis_cli::{Args, run};

const DECLARATIONS_JSON: &str = r#"
[
    {
        "kind": "protocol",
        "name": "Cache",
        "members": [ { "name": "get(key:)", "kind": "method" } ]
    },
    {
        "kind": "class",
        "name": "SessionStore",
        "inherited_types": ["Cache"],
        "members": [
            { "name": "entries", "type_annotation": "[String: Session]" },
            { "name": "get(key:)", "kind": "method", "access": "public" }
        ]
    },
    {
        "kind": "struct",
        "name": "Session",
        "members": [ { "name": "id", "type_annotation": "UUID" } ]
    }
]
"#;

const CONFIG_TOML: &str = r#"
title = "Sessions"

[[rectangles]]
name = "Storage"
members = ["SessionStore", "Session"]
"#;

fn args(input: &str, output: &str, config: Option<String>) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        stdout: false,
        encoded: false,
        config,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_generates_script_with_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("declarations.json");
    let output_path = temp_dir.path().join("out.puml");
    fs::write(&input_path, DECLARATIONS_JSON).expect("Failed to write input");

    let args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
        None,
    );
    run(&args).expect("run should succeed");

    let script = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(script.starts_with("@startuml"));
    assert!(script.ends_with("@enduml"));
    assert!(script.contains("hide empty members"));
    assert!(script.contains("protocol \"Cache\" as Cache {"));
    assert!(script.contains("class \"SessionStore\" as SessionStore {"));
    assert!(script.contains("Cache <|-- SessionStore"));
}

#[test]
fn e2e_config_file_drives_rectangles_and_title() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("declarations.json");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("out.puml");
    fs::write(&input_path, DECLARATIONS_JSON).expect("Failed to write input");
    fs::write(&config_path, CONFIG_TOML).expect("Failed to write config");

    let args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
        Some(config_path.to_string_lossy().to_string()),
    );
    run(&args).expect("run should succeed");

    let script = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(script.contains("title Sessions"));
    assert!(script.contains("rectangle \"Storage\" {"));
    assert!(script.contains("  class \"SessionStore\" as SessionStore {"));

    // The protocol is not grouped, so it stays at top level.
    assert!(script.contains("\nprotocol \"Cache\" as Cache {"));
}

#[test]
fn e2e_encoded_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("declarations.json");
    let output_path = temp_dir.path().join("out.txt");
    fs::write(&input_path, "[]").expect("Failed to write input");

    let mut args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
        None,
    );
    args.encoded = true;
    run(&args).expect("run should succeed");

    let encoded = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(encoded.starts_with("~h"));
    assert!(encoded[2..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.puml");

    let args = args("no/such/input.json", &output_path.to_string_lossy(), None);
    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}

#[test]
fn e2e_invalid_json_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("declarations.json");
    let output_path = temp_dir.path().join("out.puml");
    fs::write(&input_path, "{ not json ]").expect("Failed to write input");

    let args = args(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
        None,
    );
    assert!(run(&args).is_err());
}
