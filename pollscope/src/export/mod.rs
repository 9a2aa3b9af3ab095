//! Trace export functionality
//!
//! Serializes a trace session into Chrome Trace Event Format for timeline
//! viewers (Perfetto, chrome://tracing, Speedscope).

pub mod chrome_trace;

pub use chrome_trace::{ChromeTraceExporter, TRACE_OUTPUT_PATH};
