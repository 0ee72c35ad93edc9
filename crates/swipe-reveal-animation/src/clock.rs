//! Frame time sources.
//!
//! The scroller never sleeps; it samples "now" whenever the host's render
//! loop asks for the next offset. Tests drive a `ManualClock` instead.

use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Source of the current frame time in nanoseconds.
pub trait FrameTimeSource {
    fn now_nanos(&self) -> u64;

    fn now_millis(&self) -> u64 {
        self.now_nanos() / NANOS_PER_MILLI
    }
}

/// Monotonic wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimeSource for MonotonicClock {
    fn now_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Hand-advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_nanos(&self, nanos: u64) {
        self.nanos.set(self.nanos.get().saturating_add(nanos));
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance_nanos(millis.saturating_mul(NANOS_PER_MILLI));
    }
}

impl FrameTimeSource for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.nanos.get()
    }
}
