//! Host debugger capability.
//!
//! The engine never owns a debugger; it consumes this trait. A host
//! integration wraps a concrete debugger (gdb, lldb, a DAP bridge) and is
//! responsible for delivering every breakpoint stop to
//! [`crate::tracer::BreakpointController::on_breakpoint_hit`] — including
//! stops that occur while another hit is blocked inside
//! [`DebuggerHost::finish_current_frame`]. The engine assumes the host
//! serializes those deliveries relative to each other; the session buffer
//! is locked anyway, so a host that does not serialize them still cannot
//! corrupt the trace.

pub mod null;

pub use null::NullDebugger;

use crate::domain::{BreakpointId, DebuggerError, Tid};

/// Role a breakpoint plays in the engine.
///
/// Span breakpoints pause the hit thread for the duration of the
/// instrumented call; plugin-event breakpoints are internal and let
/// execution continue as soon as the handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointKind {
    /// Paired Begin/End tracing around a poll call.
    Span,
    /// Fire-and-continue runtime-internal event.
    PluginEvent,
}

/// Synchronous command surface the engine requires from a host debugger.
///
/// All operations are synchronous from the engine's perspective.
/// [`DebuggerHost::finish_current_frame`] blocks the hit thread but never
/// the rest of the target.
pub trait DebuggerHost {
    /// Register a breakpoint on `symbol`.
    ///
    /// # Errors
    /// [`DebuggerError::SymbolNotFound`] when the target binary does not
    /// contain the symbol.
    fn register(&self, symbol: &str, kind: BreakpointKind) -> Result<BreakpointId, DebuggerError>;

    /// Run the interrupted thread until the current call frame returns.
    ///
    /// Blocks the calling context for as long as the instrumented call
    /// takes; other target threads keep running and may hit their own
    /// breakpoints in the meantime. No timeout: a deadlocked target shows
    /// up as an indefinitely open span, which is the honest answer.
    fn finish_current_frame(&self) -> Result<(), DebuggerError>;

    /// Identifier of the thread that hit the current breakpoint.
    fn current_thread(&self) -> Tid;

    /// Best-effort monotonic clock read executed inside the target.
    ///
    /// # Errors
    /// [`DebuggerError::ClockUnavailable`] when the in-target call cannot
    /// be evaluated; the engine then falls back to the host wall clock.
    fn monotonic_ns(&self) -> Result<u64, DebuggerError>;

    /// Evaluate an expression in the inferior and render the result.
    fn evaluate(&self, expr: &str) -> Result<String, DebuggerError>;
}
