//! Breakpoint controller and span tracer.
//!
//! Owns the set of active breakpoints and the trace session. The host
//! delivers every breakpoint stop to
//! [`BreakpointController::on_breakpoint_hit`]; the controller routes it
//! by the role recorded at registration time.
//!
//! A span hit blocks the interrupted thread until the instrumented call
//! returns, so further hits — nested ones on the same thread, unrelated
//! ones on other threads — arrive re-entrantly while the outer span is
//! still open. Matching relies on per-thread stack discipline, never on
//! symbol identity: recursive polls of the same symbol nest instead of
//! collapsing, and identical names on different threads stay independent.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{info, warn};

use crate::clock::TraceClock;
use crate::debugger::{BreakpointKind, DebuggerHost};
use crate::domain::{BreakpointId, ExportError};
use crate::export::{ChromeTraceExporter, TRACE_OUTPUT_PATH};
use crate::plugins::RuntimePlugin;
use crate::session::{TraceEvent, TraceSession};
use crate::symbol_map::SymbolMap;

/// What a registered breakpoint means to the engine.
#[derive(Debug, Clone)]
enum BreakpointRole {
    /// Begin/End tracing under the future's display name.
    Span { name: String },
    /// Instant event fed through the runtime plugin.
    PluginEvent { symbol: String },
}

/// Registration outcome, for the startup summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub span_breakpoints: usize,
    pub plugin_breakpoints: usize,
    pub skipped: usize,
}

/// Breakpoint controller for one tracing session.
///
/// Generic over the host so embeddings keep access to their concrete
/// debugger through [`BreakpointController::host`].
pub struct BreakpointController<H: DebuggerHost> {
    host: H,
    plugin: Box<dyn RuntimePlugin>,
    clock: TraceClock,
    routes: HashMap<BreakpointId, BreakpointRole>,
    session: Mutex<TraceSession>,
    summary: InstallSummary,
}

impl<H: DebuggerHost> BreakpointController<H> {
    /// Register every breakpoint the session needs.
    ///
    /// Span breakpoints come from the symbol map, plugin-event breakpoints
    /// from the selected plugin. Symbols the target does not contain are
    /// logged and skipped; they never abort the rest of the setup.
    pub fn install(host: H, map: &SymbolMap, plugin: Box<dyn RuntimePlugin>) -> Self {
        let mut routes = HashMap::new();
        let mut summary = InstallSummary::default();

        for (symbol, name) in map.iter() {
            match host.register(symbol, BreakpointKind::Span) {
                Ok(id) => {
                    routes.insert(id, BreakpointRole::Span { name: name.to_string() });
                    summary.span_breakpoints += 1;
                }
                Err(e) => {
                    warn!("skipping poll span {symbol}: {e}");
                    summary.skipped += 1;
                }
            }
        }

        for symbol in plugin.extra_symbols() {
            match host.register(&symbol, BreakpointKind::PluginEvent) {
                Ok(id) => {
                    routes.insert(id, BreakpointRole::PluginEvent { symbol });
                    summary.plugin_breakpoints += 1;
                }
                Err(e) => {
                    warn!("skipping runtime event {symbol}: {e}");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "breakpoints set: {} future polls, {} runtime events ({} skipped)",
            summary.span_breakpoints, summary.plugin_breakpoints, summary.skipped
        );

        Self {
            host,
            plugin,
            clock: TraceClock::new(),
            routes,
            session: Mutex::new(TraceSession::new()),
            summary,
        }
    }

    /// Registration counts from [`BreakpointController::install`].
    pub fn summary(&self) -> InstallSummary {
        self.summary
    }

    /// Host this controller drives.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle one breakpoint stop, delivered by the host.
    pub fn on_breakpoint_hit(&self, id: BreakpointId) {
        let Some(role) = self.routes.get(&id) else {
            warn!("hit on unknown breakpoint {id}");
            return;
        };
        match role {
            BreakpointRole::Span { name } => self.trace_span(name),
            BreakpointRole::PluginEvent { symbol } => self.plugin_event(symbol),
        }
    }

    fn trace_span(&self, name: &str) {
        let tid = self.host.current_thread();
        let t0 = self.clock.now(&self.host);
        self.session().append(TraceEvent::begin(t0.timestamp, tid, name));

        // Blocks until the poll returns. Nested hits re-enter
        // on_breakpoint_hit while we wait; the session lock is not held
        // here, so their appends land between our Begin and End.
        if let Err(e) = self.host.finish_current_frame() {
            warn!("run-until-return failed for {name}: {e}");
        }

        // End is emitted even after a stepping failure so the span closes.
        let t1 = self.clock.now(&self.host);
        self.session().append(TraceEvent::end(t1.timestamp, tid, name));
    }

    fn plugin_event(&self, symbol: &str) {
        let tid = self.host.current_thread();
        let now = self.clock.now(&self.host);
        let args = self.plugin.on_event(symbol, &self.host);
        self.session().append(TraceEvent::instant(now.timestamp, tid, symbol, args));
        // No stepping: the target resumes as soon as this handler returns.
    }

    /// Snapshot of the buffered events.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.session().events().to_vec()
    }

    /// Number of events buffered so far.
    pub fn event_count(&self) -> usize {
        self.session().len()
    }

    /// Write the trace document to the fixed output path and report how
    /// many events it contains.
    ///
    /// Reads the buffer without consuming it: calling this again with no
    /// intervening events produces an identical document.
    pub fn dump(&self) -> Result<usize, ExportError> {
        let session = self.session();
        let exporter = ChromeTraceExporter::new(self.clock.session_source());
        let count = exporter.export_to_path(&session, Path::new(TRACE_OUTPUT_PATH))?;
        info!("trace written: {TRACE_OUTPUT_PATH} (events={count})");
        Ok(count)
    }

    fn session(&self) -> MutexGuard<'_, TraceSession> {
        // An append-only buffer has no invariant a panicked writer can
        // break mid-way; recover it rather than poisoning the session.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
