//! Time-based horizontal offset interpolation.
//!
//! A `Scroller` owns at most one `ScrollSession`. Starting a new session
//! replaces the running one outright; there is no blending. The host
//! render loop calls `compute_scroll_offset` once per frame and applies
//! `curr_x` while it keeps returning `true`.

use std::rc::Rc;

use crate::clock::{FrameTimeSource, NANOS_PER_MILLI};
use crate::easing::{AnimationSpec, Easing};

/// One animation from `start_x` to `final_x`, anchored at a frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSession {
    pub start_x: i32,
    pub final_x: i32,
    pub start_time_nanos: u64,
    pub duration_nanos: u64,
    pub easing: Easing,
}

impl ScrollSession {
    pub fn delta_x(&self) -> i32 {
        self.final_x - self.start_x
    }

    /// Offset at `now_nanos` and whether the session has run its course.
    pub fn offset_at(&self, now_nanos: u64) -> (i32, bool) {
        let elapsed = now_nanos.saturating_sub(self.start_time_nanos);
        if elapsed >= self.duration_nanos {
            return (self.final_x, true);
        }
        let linear_progress = elapsed as f32 / self.duration_nanos as f32;
        let progress = self.easing.transform(linear_progress);
        let x = self.start_x + (progress * self.delta_x() as f32).round() as i32;
        (x, false)
    }
}

/// Interpolates a horizontal offset over time.
pub struct Scroller {
    clock: Rc<dyn FrameTimeSource>,
    easing: Easing,
    session: Option<ScrollSession>,
    curr_x: i32,
    final_x: i32,
}

impl Scroller {
    /// Creates a scroller using the default viscous-fluid interpolation.
    pub fn new(clock: Rc<dyn FrameTimeSource>) -> Self {
        Self::with_easing(clock, Easing::default())
    }

    pub fn with_easing(clock: Rc<dyn FrameTimeSource>, easing: Easing) -> Self {
        Self {
            clock,
            easing,
            session: None,
            curr_x: 0,
            final_x: 0,
        }
    }

    /// Returns true when no session is running.
    pub fn is_finished(&self) -> bool {
        self.session.is_none()
    }

    /// The offset computed by the last `compute_scroll_offset` call.
    pub fn curr_x(&self) -> i32 {
        self.curr_x
    }

    /// Where the current (or last) session ends.
    pub fn final_x(&self) -> i32 {
        self.final_x
    }

    pub fn session(&self) -> Option<&ScrollSession> {
        self.session.as_ref()
    }

    /// Milliseconds since the running session started, or 0 when idle.
    pub fn time_passed_millis(&self) -> u64 {
        self.session
            .as_ref()
            .map(|session| {
                self.clock.now_nanos().saturating_sub(session.start_time_nanos) / NANOS_PER_MILLI
            })
            .unwrap_or(0)
    }

    /// Starts scrolling from `start_x` by `dx` over `duration_millis`.
    pub fn start_scroll(&mut self, start_x: i32, dx: i32, duration_millis: u64) {
        let session = ScrollSession {
            start_x,
            final_x: start_x + dx,
            start_time_nanos: self.clock.now_nanos(),
            duration_nanos: duration_millis.saturating_mul(NANOS_PER_MILLI),
            easing: self.easing,
        };
        if self.session.is_some() {
            log::trace!("scroller: replacing running session");
        }
        log::trace!(
            "scroller: start {} -> {} over {}ms",
            session.start_x,
            session.final_x,
            duration_millis
        );
        self.curr_x = start_x;
        self.final_x = session.final_x;
        self.session = Some(session);
    }

    /// Starts scrolling with a full animation spec, overriding the easing.
    pub fn start_scroll_with_spec(&mut self, start_x: i32, dx: i32, spec: AnimationSpec) {
        self.easing = spec.easing;
        self.start_scroll(start_x, dx, spec.duration_millis);
    }

    /// Stops the running session. `curr_x` jumps to the final position
    /// inside the scroller; callers never see it applied because
    /// `compute_scroll_offset` reports no further steps.
    pub fn abort_animation(&mut self) {
        if self.session.take().is_some() {
            log::trace!("scroller: aborted, final_x={}", self.final_x);
        }
        self.curr_x = self.final_x;
    }

    /// Advances to "now". Returns true when the caller should apply
    /// `curr_x` (including the final step that lands on `final_x`).
    pub fn compute_scroll_offset(&mut self) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let (x, finished) = session.offset_at(self.clock.now_nanos());
        self.curr_x = x;
        if finished {
            self.session = None;
        }
        true
    }
}

impl std::fmt::Debug for Scroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("easing", &self.easing)
            .field("session", &self.session)
            .field("curr_x", &self.curr_x)
            .field("final_x", &self.final_x)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
