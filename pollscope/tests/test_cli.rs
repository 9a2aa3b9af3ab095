//! Binary-level tests for the offline commands.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pollscope"))
        .args(args)
        .output()
        .expect("failed to run pollscope")
}

#[test]
fn test_graph_generates_dot_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deps.json");
    std::fs::write(&input, r#"{"dependency_tree": {"A": ["B"], "B": []}}"#).unwrap();

    let output = run(&["graph", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let dot_path = dir.path().join("deps.dot");
    assert!(dot_path.exists());
    let dot = std::fs::read_to_string(&dot_path).unwrap();
    assert_eq!(dot.matches("[label=").count(), 2);
    assert_eq!(dot.matches(" -> ").count(), 1);
    assert!(dot.contains("\"A\" -> \"B\";"));
}

#[test]
fn test_graph_sanitizes_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deps.json");
    std::fs::write(&input, r#"{"dependency_tree": {"Foo<Bar>(1)": []}}"#).unwrap();

    let output = run(&["graph", input.to_str().unwrap()]);
    assert!(output.status.success());

    let dot = std::fs::read_to_string(dir.path().join("deps.dot")).unwrap();
    let node_line = dot
        .lines()
        .find(|l| l.contains("[label=\"Foo<Bar>(1)\"]"))
        .expect("node declaration present");
    let identifier = node_line.trim().split('"').nth(1).unwrap();
    assert!(identifier.chars().next().unwrap().is_ascii_alphabetic());
    assert!(!identifier.contains(['<', '>', '(', ')', ' ']));
    assert!(!identifier.contains("__"));
}

#[test]
fn test_graph_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.json");

    let output = run(&["graph", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!dir.path().join("absent.dot").exists());
}

#[test]
fn test_graph_missing_key_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deps.json");
    std::fs::write(&input, r#"{"futures": {}}"#).unwrap();

    let output = run(&["graph", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("dependency_tree"));
    assert!(!dir.path().join("deps.dot").exists());
}

#[test]
fn test_graph_malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deps.json");
    std::fs::write(&input, "{ not json").unwrap();

    let output = run(&["graph", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!dir.path().join("deps.dot").exists());
}

#[test]
fn test_graph_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("deps.json");
    let out = dir.path().join("custom.dot");
    std::fs::write(&input, r#"{"dependency_tree": {"A": []}}"#).unwrap();

    let output = run(&["graph", input.to_str().unwrap(), "--output", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(out.exists());
}

#[test]
fn test_inspect_missing_map_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("future_map.json");

    let output = run(&["inspect", "--map", map.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("future map not found"));
}

#[test]
fn test_inspect_unknown_plugin_falls_back_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("future_map.json");
    std::fs::write(&map, r#"{"f": {"name": "A", "poll_symbol": "a::poll"}}"#).unwrap();

    let output = run(&["inspect", "--map", map.to_str().unwrap(), "--plugin", "acme-rt"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plugin: noop"));
    assert!(stdout.contains("(no runtime events)"));
}

#[test]
fn test_inspect_lists_tokio_runtime_events() {
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("future_map.json");
    std::fs::write(&map, r#"{"f": {"name": "A", "poll_symbol": "a::poll"}}"#).unwrap();

    let output = run(&["inspect", "--map", map.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plugin: tokio"));
    assert!(stdout.contains("tokio::runtime::task::waker::wake_by_val"));
}
