//! A no-op debugger host for when no debugger is attached.
//!
//! Used by offline commands and as a stand-in until a real host connects.
//! Registration and inferior access fail cleanly; stepping is a no-op.

use crate::domain::{BreakpointId, DebuggerError, Tid};

use super::{BreakpointKind, DebuggerHost};

/// A host with no debugger behind it.
#[derive(Debug, Default)]
pub struct NullDebugger;

impl NullDebugger {
    pub fn new() -> Self {
        Self
    }
}

impl DebuggerHost for NullDebugger {
    fn register(&self, _symbol: &str, _kind: BreakpointKind) -> Result<BreakpointId, DebuggerError> {
        Err(DebuggerError::NotAttached)
    }

    fn finish_current_frame(&self) -> Result<(), DebuggerError> {
        Ok(())
    }

    fn current_thread(&self) -> Tid {
        Tid(0)
    }

    fn monotonic_ns(&self) -> Result<u64, DebuggerError> {
        Err(DebuggerError::ClockUnavailable("no debugger attached".to_string()))
    }

    fn evaluate(&self, expr: &str) -> Result<String, DebuggerError> {
        Err(DebuggerError::EvalFailed {
            expr: expr.to_string(),
            reason: "no debugger attached".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_fails_cleanly() {
        let host = NullDebugger::new();
        let result = host.register("app::poll", BreakpointKind::Span);
        assert!(matches!(result, Err(DebuggerError::NotAttached)));
    }

    #[test]
    fn test_stepping_is_a_noop() {
        let host = NullDebugger::new();
        assert!(host.finish_current_frame().is_ok());
    }

    #[test]
    fn test_clock_is_unavailable() {
        let host = NullDebugger::new();
        assert!(matches!(host.monotonic_ns(), Err(DebuggerError::ClockUnavailable(_))));
    }

    #[test]
    fn test_evaluate_fails_with_expression_context() {
        let host = NullDebugger::new();
        let err = host.evaluate("$rdi").unwrap_err();
        assert!(err.to_string().contains("$rdi"));
    }
}
