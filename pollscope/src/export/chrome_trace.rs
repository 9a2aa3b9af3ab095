//! Chrome Trace Event Format serialization.
//!
//! Spec: <https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU/preview>
//!
//! Timestamps are microseconds throughout the document, converted from
//! the engine's nanosecond clock readings at emission; nanoseconds are
//! never declared anywhere in the output. The header records which clock
//! source the session ended up on.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::clock::ClockSource;
use crate::domain::ExportError;
use crate::session::{EventArgs, Phase, TraceEvent, TraceSession};

/// Fixed output path used by the dump action.
pub const TRACE_OUTPUT_PATH: &str = "traceEvents.json";

/// Constant process tag; the trace describes a single inferior.
const TRACE_PID: &str = "1";

const DISPLAY_TIME_UNIT: &str = "ms";

#[derive(Debug, Serialize)]
struct ChromeTraceEvent<'a> {
    name: &'a str,
    /// Phase: "B" = begin, "E" = end, "i" = instant
    ph: &'static str,
    /// Timestamp in microseconds
    ts: f64,
    pid: &'static str,
    tid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<&'a EventArgs>,
}

#[derive(Debug, Serialize)]
struct OtherData {
    #[serde(rename = "clockSource")]
    clock_source: &'static str,
}

#[derive(Debug, Serialize)]
struct ChromeTrace<'a> {
    #[serde(rename = "traceEvents")]
    trace_events: Vec<ChromeTraceEvent<'a>>,
    #[serde(rename = "displayTimeUnit")]
    display_time_unit: &'static str,
    #[serde(rename = "otherData")]
    other_data: OtherData,
}

/// Chrome trace exporter for timeline visualization.
pub struct ChromeTraceExporter {
    clock_source: ClockSource,
}

impl ChromeTraceExporter {
    pub fn new(clock_source: ClockSource) -> Self {
        Self { clock_source }
    }

    /// Serialize `session` into `writer`; returns the number of events
    /// written.
    ///
    /// Reads the buffer without mutating it — repeated exports of an
    /// unchanged session produce identical documents. Spans left open at
    /// detach are written as-is; the consumer tolerates unmatched Begin
    /// events.
    pub fn export<W: Write>(
        &self,
        session: &TraceSession,
        writer: W,
    ) -> Result<usize, ExportError> {
        let trace = ChromeTrace {
            trace_events: session.events().iter().map(to_chrome_event).collect(),
            display_time_unit: DISPLAY_TIME_UNIT,
            other_data: OtherData { clock_source: self.clock_source.label() },
        };
        serde_json::to_writer_pretty(writer, &trace)?;
        Ok(session.len())
    }

    /// Export to a file path.
    pub fn export_to_path(
        &self,
        session: &TraceSession,
        path: &Path,
    ) -> Result<usize, ExportError> {
        let file = File::create(path)?;
        self.export(session, BufWriter::new(file))
    }
}

fn to_chrome_event(event: &TraceEvent) -> ChromeTraceEvent<'_> {
    ChromeTraceEvent {
        name: &event.name,
        ph: phase_label(event.phase),
        ts: event.timestamp.as_micros_f64(),
        pid: TRACE_PID,
        tid: event.tid.0.to_string(),
        args: event.args.as_ref(),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Begin => "B",
        Phase::End => "E",
        Phase::Instant => "i",
    }
}
