//! Tokio scheduler plugin.
//!
//! Instruments scheduler internals the generic poll tracer never sees:
//! task wake-ups, task dispatch, and worker parking. Symbol names track
//! the multi-thread scheduler's module layout.

use serde_json::json;

use crate::debugger::DebuggerHost;
use crate::session::EventArgs;

use super::RuntimePlugin;

/// `(symbol, event kind)` pairs for the multi-thread scheduler.
const SCHEDULER_SYMBOLS: &[(&str, &str)] = &[
    ("tokio::runtime::task::waker::wake_by_val", "wake"),
    ("tokio::runtime::task::waker::wake_by_ref", "wake"),
    ("tokio::runtime::scheduler::multi_thread::worker::Context::run_task", "run_task"),
    ("tokio::runtime::scheduler::multi_thread::worker::Context::park", "park"),
];

/// First-argument register on SysV x86-64; carries the task header
/// pointer in the wake entry points.
const TASK_PTR_EXPR: &str = "$rdi";

#[derive(Debug, Default)]
pub struct TokioPlugin;

impl TokioPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl RuntimePlugin for TokioPlugin {
    fn name(&self) -> &'static str {
        "tokio"
    }

    fn extra_symbols(&self) -> Vec<String> {
        SCHEDULER_SYMBOLS.iter().map(|(s, _)| (*s).to_string()).collect()
    }

    fn on_event(&self, symbol: &str, host: &dyn DebuggerHost) -> Option<EventArgs> {
        let kind = SCHEDULER_SYMBOLS.iter().find(|(s, _)| *s == symbol).map(|(_, k)| *k)?;
        let mut args = EventArgs::new();
        args.insert("event".to_string(), json!(kind));
        if kind == "wake" {
            // Best effort: wake attribution still works without it.
            if let Ok(ptr) = host.evaluate(TASK_PTR_EXPR) {
                args.insert("task".to_string(), json!(ptr));
            }
        }
        Some(args)
    }
}
