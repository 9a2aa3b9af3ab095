//! Session time source.
//!
//! Readings prefer a monotonic clock evaluated inside the target; when the
//! host cannot provide one, the clock falls back to the host's wall clock.
//! Every reading carries its source, the first fallback is warned about
//! once, and the exported document declares which source the session ended
//! up on — the two are never mixed silently under one label.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::debugger::DebuggerHost;
use crate::domain::Timestamp;

/// Which strategy produced a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// Monotonic clock evaluated inside the target.
    TargetMonotonic,
    /// Host wall clock. Sub-millisecond precision is not guaranteed and
    /// the value shares no epoch with the target's monotonic clock.
    HostWallClock,
}

impl ClockSource {
    /// Stable label recorded in exported trace headers.
    pub fn label(self) -> &'static str {
        match self {
            ClockSource::TargetMonotonic => "target-monotonic",
            ClockSource::HostWallClock => "host-wallclock",
        }
    }
}

/// A single clock reading with its precision flag.
#[derive(Debug, Clone, Copy)]
pub struct ClockReading {
    pub timestamp: Timestamp,
    pub source: ClockSource,
}

/// Two-strategy session clock.
#[derive(Debug, Default)]
pub struct TraceClock {
    degraded: AtomicBool,
}

impl TraceClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a reading, preferring the in-target monotonic clock.
    pub fn now(&self, host: &dyn DebuggerHost) -> ClockReading {
        match host.monotonic_ns() {
            Ok(ns) => ClockReading {
                timestamp: Timestamp(ns),
                source: ClockSource::TargetMonotonic,
            },
            Err(e) => {
                if !self.degraded.swap(true, Ordering::Relaxed) {
                    warn!("in-target clock unavailable ({e}), falling back to host wall clock");
                }
                ClockReading {
                    timestamp: host_wallclock_ns(),
                    source: ClockSource::HostWallClock,
                }
            }
        }
    }

    /// Worst source any reading in this session came from.
    pub fn session_source(&self) -> ClockSource {
        if self.degraded.load(Ordering::Relaxed) {
            ClockSource::HostWallClock
        } else {
            ClockSource::TargetMonotonic
        }
    }
}

fn host_wallclock_ns() -> Timestamp {
    let ns = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX));
    Timestamp(ns)
}
