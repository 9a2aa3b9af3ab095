//! Symbol map artifact loading.

use pollscope::domain::EngineError;
use pollscope::symbol_map::SymbolMap;

fn write_artifact(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn test_load_builds_symbol_projection() {
    let file = write_artifact(
        r#"{
            "fut-http": {"name": "HttpGet", "poll_symbol": "app::http::HttpGet::poll"},
            "fut-join": {"name": "JoinAll"},
            "fut-tick": {"name": "Tick", "poll_symbol": "app::timer::Tick::poll"}
        }"#,
    );

    let map = SymbolMap::load(file.path()).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.display_name("app::http::HttpGet::poll"), Some("HttpGet"));
    assert_eq!(map.display_name("app::timer::Tick::poll"), Some("Tick"));
    // JoinAll has no poll symbol: not observable, never registered.
    assert!(map.iter().all(|(_, name)| name != "JoinAll"));
}

#[test]
fn test_missing_artifact_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = SymbolMap::load(dir.path().join("future_map.json")).unwrap_err();
    assert!(matches!(err, EngineError::SymbolMapMissing(_)));
    assert!(err.to_string().contains("future_map.json"));
}

#[test]
fn test_malformed_artifact_is_a_parse_error() {
    let file = write_artifact("{ not json");
    let err = SymbolMap::load(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::SymbolMapParse { .. }));
}

#[test]
fn test_entry_missing_name_is_a_parse_error() {
    let file = write_artifact(r#"{"f": {"poll_symbol": "a::poll"}}"#);
    let err = SymbolMap::load(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::SymbolMapParse { .. }));
}
