//! Future dependency graph conversion.
//!
//! Turns the dependency document produced by the symbol discovery step
//! into Graphviz DOT for visual inspection. Pure data transform: the
//! whole DOT text is rendered before any output file is created, so a
//! failed run never leaves a partial file behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Input document: `{"dependency_tree": {future: [dependencies...]}}`.
#[derive(Debug, Deserialize)]
pub struct DependencyDoc {
    pub dependency_tree: BTreeMap<String, Vec<String>>,
}

/// Make a type name usable as a DOT identifier.
///
/// Everything outside letters/digits/underscore becomes an underscore,
/// runs collapse to one, ends are trimmed, and a leading letter is
/// guaranteed.
pub fn sanitize_node_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let mapped = if c.is_ascii_alphanumeric() { c } else { '_' };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    let mut id = out.trim_matches('_').to_string();
    if !id.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        id.insert(0, 'n');
    }
    id
}

/// Escape a label for a double-quoted DOT string.
fn escape_label(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the dependency tree as a DOT digraph.
///
/// One node declaration per key (label = original name, identifier =
/// sanitized name) and one edge per (node, dependency) pair. The input's
/// ordered keys make the output deterministic.
pub fn render_dot(tree: &BTreeMap<String, Vec<String>>) -> String {
    let mut lines = vec![
        "digraph FutureDependencies {".to_string(),
        "    rankdir=LR;".to_string(),
        "    node [shape=box, style=filled, fillcolor=lightblue, fontname=\"monospace\"];"
            .to_string(),
        "    edge [fontname=\"monospace\"];".to_string(),
    ];

    for name in tree.keys() {
        lines.push(format!(
            "    \"{}\" [label=\"{}\"];",
            sanitize_node_name(name),
            escape_label(name)
        ));
    }

    for (name, deps) in tree {
        let source = sanitize_node_name(name);
        for dep in deps {
            lines.push(format!("    \"{source}\" -> \"{}\";", sanitize_node_name(dep)));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Convert `input` to DOT, writing next to it unless `output` is given.
///
/// Returns the path written. Every failure (unreadable input, malformed
/// document, missing `dependency_tree` key) happens before the output
/// file is created.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let doc: DependencyDoc = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid dependency document {}", input.display()))?;
    let dot = render_dot(&doc.dependency_tree);

    let out_path = output.map_or_else(|| input.with_extension("dot"), Path::to_path_buf);
    std::fs::write(&out_path, dot)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_generic_punctuation() {
        let id = sanitize_node_name("Foo<Bar>(1)");
        assert_eq!(id, "Foo_Bar_1");
        assert!(id.chars().next().unwrap().is_ascii_alphabetic());
        assert!(!id.contains("__"));
    }

    #[test]
    fn test_sanitize_collapses_existing_underscore_runs() {
        assert_eq!(sanitize_node_name("a__b"), "a_b");
        assert_eq!(sanitize_node_name("a: <b>"), "a_b");
    }

    #[test]
    fn test_sanitize_guarantees_leading_letter() {
        assert_eq!(sanitize_node_name("1Foo"), "n1Foo");
        assert_eq!(sanitize_node_name("<<>>"), "n");
    }

    #[test]
    fn test_render_two_nodes_one_edge() {
        let mut tree = BTreeMap::new();
        tree.insert("A".to_string(), vec!["B".to_string()]);
        tree.insert("B".to_string(), vec![]);

        let dot = render_dot(&tree);
        assert_eq!(dot.matches("[label=").count(), 2);
        assert_eq!(dot.matches(" -> ").count(), 1);
        assert!(dot.contains("\"A\" -> \"B\";"));
    }

    #[test]
    fn test_labels_escape_quotes_and_backslashes() {
        let mut tree = BTreeMap::new();
        tree.insert(r#"Select<"a", b\c>"#.to_string(), vec![]);

        let dot = render_dot(&tree);
        assert!(dot.contains(r#"label="Select<\"a\", b\\c>""#));
    }

    #[test]
    fn test_missing_dependency_tree_key_is_an_error() {
        let err = serde_json::from_str::<DependencyDoc>(r#"{"other": {}}"#).unwrap_err();
        assert!(err.to_string().contains("dependency_tree"));
    }
}
