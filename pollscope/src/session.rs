//! Trace event buffer.
//!
//! Events are appended in emission order and never mutated afterwards.
//! The buffer lives from engine start until export or detach. Spans still
//! open at detach stay unmatched in the output; trace consumers tolerate
//! them.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::{Tid, Timestamp};

/// Event pairing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Opens a span; matched by the next unmatched `End` on the same thread.
    Begin,
    /// Closes the most recently opened span on its thread.
    End,
    /// Zero-duration occurrence with no pairing obligation.
    Instant,
}

/// Annotations attached to an event.
pub type EventArgs = HashMap<String, Value>;

/// One observation, immutable once appended.
#[derive(Debug, Clone)]
pub struct TraceEvent {
    pub phase: Phase,
    pub timestamp: Timestamp,
    pub tid: Tid,
    pub name: String,
    pub args: Option<EventArgs>,
}

impl TraceEvent {
    pub fn begin(timestamp: Timestamp, tid: Tid, name: impl Into<String>) -> Self {
        Self { phase: Phase::Begin, timestamp, tid, name: name.into(), args: None }
    }

    pub fn end(timestamp: Timestamp, tid: Tid, name: impl Into<String>) -> Self {
        Self { phase: Phase::End, timestamp, tid, name: name.into(), args: None }
    }

    pub fn instant(
        timestamp: Timestamp,
        tid: Tid,
        name: impl Into<String>,
        args: Option<EventArgs>,
    ) -> Self {
        Self { phase: Phase::Instant, timestamp, tid, name: name.into(), args }
    }
}

/// Append-only, chronologically ordered event store for one session.
#[derive(Debug, Default)]
pub struct TraceSession {
    events: Vec<TraceEvent>,
}

impl TraceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Insertion order is emission order.
    pub fn append(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
