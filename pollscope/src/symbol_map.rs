//! Future symbol map loading.
//!
//! The map artifact is produced by the static-analysis step that walks the
//! target's debug info. Each entry describes one future: a display name
//! and, when the future is directly observable, the symbol of its poll
//! function. The engine only needs the `poll symbol -> display name`
//! projection, fixed for the life of the session.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::domain::EngineError;

#[derive(Debug, Deserialize)]
struct FutureEntry {
    name: String,
    #[serde(default)]
    poll_symbol: Option<String>,
}

/// Projection `poll symbol -> display name`.
#[derive(Debug, Default)]
pub struct SymbolMap {
    by_symbol: HashMap<String, String>,
}

impl SymbolMap {
    /// Load the map artifact from disk.
    ///
    /// A missing artifact is fatal: without it the engine has nothing to
    /// instrument and a session would produce an empty, meaningless trace.
    /// Entries without a `poll_symbol` describe futures that are not
    /// directly observable via breakpoints; they are skipped.
    ///
    /// # Errors
    /// - [`EngineError::SymbolMapMissing`] if the artifact does not exist
    /// - [`EngineError::SymbolMapParse`] if it is not valid JSON of the
    ///   expected shape
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::SymbolMapMissing(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let entries: HashMap<String, FutureEntry> =
            serde_json::from_str(&raw).map_err(|source| EngineError::SymbolMapParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_entries(entries.into_values()))
    }

    fn from_entries(entries: impl IntoIterator<Item = FutureEntry>) -> Self {
        let mut by_symbol = HashMap::new();
        for entry in entries {
            if let Some(symbol) = entry.poll_symbol {
                by_symbol.insert(symbol, entry.name);
            }
        }
        Self { by_symbol }
    }

    /// Display name for a poll symbol, if the map knows it.
    pub fn display_name(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).map(String::as_str)
    }

    /// Iterate `(poll symbol, display name)` pairs for registration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_symbol.iter().map(|(s, n)| (s.as_str(), n.as_str()))
    }

    /// Number of instrumentable futures.
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
