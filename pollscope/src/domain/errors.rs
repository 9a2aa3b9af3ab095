//! Structured error types for pollscope
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("future map not found at {}; run the symbol discovery step first", .0.display())]
    SymbolMapMissing(PathBuf),

    #[error("failed to parse future map {}: {source}", .path.display())]
    SymbolMapParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DebuggerError {
    #[error("symbol {0} not found in target")]
    SymbolNotFound(String),

    #[error("no debugger attached")]
    NotAttached,

    #[error("in-target clock read failed: {0}")]
    ClockUnavailable(String),

    #[error("failed to evaluate \"{expr}\": {reason}")]
    EvalFailed { expr: String, reason: String },

    #[error("run-until-return failed: {0}")]
    StepFailed(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_map_missing_display() {
        let err = EngineError::SymbolMapMissing(PathBuf::from("/tmp/future_map.json"));
        assert!(err.to_string().contains("/tmp/future_map.json"));
        assert!(err.to_string().contains("symbol discovery"));
    }

    #[test]
    fn test_symbol_not_found_display() {
        let err = DebuggerError::SymbolNotFound("my_app::poll".to_string());
        assert_eq!(err.to_string(), "symbol my_app::poll not found in target");
    }

    #[test]
    fn test_eval_failed_display() {
        let err = DebuggerError::EvalFailed {
            expr: "$rdi".to_string(),
            reason: "no frame selected".to_string(),
        };
        assert!(err.to_string().contains("$rdi"));
        assert!(err.to_string().contains("no frame selected"));
    }
}
