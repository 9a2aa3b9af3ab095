//! # pollscope - Breakpoint-Driven Async Poll Tracer
//!
//! pollscope reconstructs a timeline of future polls in a running async
//! program by driving a host debugger's breakpoint machinery from the
//! outside. The target is never recompiled, patched, or injected with
//! code; it only needs debug symbols for the instrumented functions.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Target Process                         │
//! │              (cooperatively scheduled futures)              │
//! └───────────────────────────┬─────────────────────────────────┘
//!                             │ breakpoint hits
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Host Debugger (external)                   │
//! │  breakpoints · run-until-return · thread id · expressions   │
//! └───────────────────────────┬─────────────────────────────────┘
//!                             │ DebuggerHost trait
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   pollscope (this crate)                    │
//! │                                                             │
//! │  ┌───────────┐    ┌──────────────┐    ┌────────────────┐  │
//! │  │ SymbolMap │───▶│  Breakpoint  │───▶│  TraceSession  │  │
//! │  │  (loader) │    │  Controller  │    │ (event buffer) │  │
//! │  └───────────┘    └──────────────┘    └────────────────┘  │
//! │                      │        │                │           │
//! │             ┌────────┘        └─────┐          ▼           │
//! │             ▼                       ▼   ┌────────────────┐ │
//! │      ┌────────────┐        ┌─────────┐ │     Export     │ │
//! │      │ TraceClock │        │ Runtime │ │  (trace JSON)  │ │
//! │      └────────────┘        │ Plugin  │ └────────────────┘ │
//! │                            └─────────┘                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`debugger`]: the [`debugger::DebuggerHost`] capability the engine
//!   consumes instead of owning a debugger, plus a no-op stand-in
//! - [`symbol_map`]: loads the externally produced future map and derives
//!   the `poll symbol -> display name` projection
//! - [`plugins`]: runtime-specific instrumentation (extra scheduler
//!   symbols, event annotations), selected by name through a registry
//! - [`tracer`]: the breakpoint controller — registration, hit routing,
//!   Begin/End span pairing, instant plugin events
//! - [`clock`]: two-strategy time source (in-target monotonic, else host
//!   wall clock) with an explicit precision flag
//! - [`session`]: append-only trace event buffer
//! - [`export`]: Chrome Trace Event Format serialization
//! - [`graph`]: future dependency tree to Graphviz DOT conversion
//! - [`preflight`]: attach-readiness checks for a target binary
//! - [`cli`], [`domain`]: argument parsing and core newtypes/errors
//!
//! ## Embedding
//!
//! The engine never talks to a debugger directly. A host integration
//! (gdb, lldb, a DAP bridge) implements [`debugger::DebuggerHost`],
//! builds a [`tracer::BreakpointController`], and forwards every
//! breakpoint stop to
//! [`tracer::BreakpointController::on_breakpoint_hit`] — including stops
//! delivered while another hit is blocked inside
//! [`debugger::DebuggerHost::finish_current_frame`]. Span pairing relies
//! on per-thread stack discipline, so nested and recursive polls come out
//! properly nested without any help from the host beyond serialized
//! callback delivery.
//!
//! Detaching mid-span leaves that span open in the output. This is
//! expected: trace consumers tolerate unmatched Begin events, and
//! synthesizing an End would fabricate a duration nobody measured.

pub mod cli;
pub mod clock;
pub mod debugger;
pub mod domain;
pub mod export;
pub mod graph;
pub mod plugins;
pub mod preflight;
pub mod session;
pub mod symbol_map;
pub mod tracer;
