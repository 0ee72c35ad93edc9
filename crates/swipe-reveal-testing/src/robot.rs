//! Robot-style driver for a single reveal container.
//!
//! The robot owns the container, a [`RecordingHost`] and a [`ManualClock`].
//! Pointer events go through the full dispatch pipeline and are stamped
//! with the clock, so velocity and animation timing are deterministic.
//!
//! # Example
//!
//! ```
//! use swipe_reveal_testing::GestureRobot;
//! use swipe_reveal_ui::{RevealState, SwipeRevealConfig};
//!
//! let mut robot = GestureRobot::new(SwipeRevealConfig::default(), 240);
//! robot.drag((300.0, 40.0), (100.0, 40.0), 10);
//! robot.wait_for_idle();
//! assert_eq!(robot.state(), RevealState::Open);
//! assert_eq!(robot.offset(), 240);
//! ```

use std::rc::Rc;

use swipe_reveal_animation::{FrameTimeSource, ManualClock};
use swipe_reveal_foundation::PointerEvent;
use swipe_reveal_ui::{RevealState, SwipeRevealConfig, SwipeRevealLayout};
use swipe_reveal_ui_graphics::Point;
use swipe_reveal_ui_layout::ChildView;

use crate::host::RecordingHost;

/// Frame interval the robot advances by between pointer moves.
pub const FRAME_MILLIS: u64 = 16;

/// Upper bound on frames pumped by [`GestureRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 600;

/// Default width of the main pane in robot-built containers.
pub const MAIN_PANE_WIDTH: i32 = 360;

pub struct GestureRobot {
    layout: SwipeRevealLayout,
    host: RecordingHost,
    clock: ManualClock,
    pointer: Option<Point>,
}

impl GestureRobot {
    /// Builds a two-pane container with the right pane measured at
    /// `right_width`.
    ///
    /// Panics if `config` is invalid; robots are for tests.
    pub fn new(config: SwipeRevealConfig, right_width: i32) -> Self {
        let clock = ManualClock::new();
        let mut layout = SwipeRevealLayout::with_config_and_clock(config, Rc::new(clock.clone()))
            .unwrap_or_else(|err| panic!("robot config rejected: {err}"));
        layout.add_child(ChildView::new().with_measured_width(MAIN_PANE_WIDTH));
        layout.add_child(ChildView::new().with_measured_width(right_width));
        layout.finish_inflate();
        Self::with_layout(layout, clock)
    }

    /// Drives an already assembled container. `clock` must be the one the
    /// container was built with.
    pub fn with_layout(layout: SwipeRevealLayout, clock: ManualClock) -> Self {
        Self {
            layout,
            host: RecordingHost::new(),
            clock,
            pointer: None,
        }
    }

    pub fn with_host(mut self, host: RecordingHost) -> Self {
        self.host = host;
        self
    }

    pub fn layout(&self) -> &SwipeRevealLayout {
        &self.layout
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn state(&self) -> RevealState {
        self.layout.state()
    }

    pub fn offset(&self) -> i32 {
        self.layout.scroll_offset()
    }

    fn uptime(&self) -> u64 {
        self.clock.now_millis()
    }

    fn send(&mut self, event: PointerEvent) -> bool {
        let event = event.with_uptime(self.uptime());
        self.layout.dispatch_touch_event(&mut self.host, &event)
    }

    /// Presses the pointer at (`x`, `y`). Returns whether anything took the
    /// gesture.
    pub fn down(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Some(Point::new(x, y));
        self.send(PointerEvent::down(x, y))
    }

    /// Moves the pressed pointer. Moves without a prior `down` are ignored.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        if self.pointer.is_none() {
            return false;
        }
        self.pointer = Some(Point::new(x, y));
        self.send(PointerEvent::moved(x, y))
    }

    /// Lifts the pointer where it last was.
    pub fn up(&mut self) -> bool {
        match self.pointer.take() {
            Some(at) => self.send(PointerEvent::up(at.x, at.y)),
            None => false,
        }
    }

    /// Cancels the gesture where the pointer last was.
    pub fn cancel(&mut self) -> bool {
        match self.pointer.take() {
            Some(at) => self.send(PointerEvent::cancel(at.x, at.y)),
            None => false,
        }
    }

    pub fn smooth_open(&mut self) {
        self.layout.smooth_open(&mut self.host);
    }

    pub fn quick_close(&mut self) {
        self.layout.quick_close(&mut self.host);
    }

    /// Advance frame time by the given duration in milliseconds.
    pub fn advance_time(&mut self, millis: u64) {
        self.clock.advance_millis(millis);
    }

    /// Advances one frame and runs the container's draw-time step.
    /// Returns true if the offset moved.
    pub fn pump_frame(&mut self) -> bool {
        self.clock.advance_millis(FRAME_MILLIS);
        self.layout.compute_scroll(&mut self.host)
    }

    /// Pumps frames until no snap animation is running. Returns the
    /// offsets applied along the way.
    pub fn wait_for_idle(&mut self) -> Vec<i32> {
        let mut offsets = Vec::new();
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.pump_frame() {
                break;
            }
            offsets.push(self.offset());
        }
        offsets
    }

    /// Presses at `from`, moves to `to` in `steps` evenly spaced frames and
    /// releases. Animation frames are pumped between moves but the settle
    /// animation is left for the caller.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        let steps = steps.max(1);
        self.down(from.0, from.1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.pump_frame();
            self.move_to(x, y);
        }
        self.up();
    }

    /// Same as [`drag`](Self::drag) but holds the pointer still for
    /// `hold_millis` before releasing, so the release carries no velocity.
    pub fn drag_and_hold(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        steps: usize,
        hold_millis: u64,
    ) {
        let steps = steps.max(1);
        self.down(from.0, from.1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.pump_frame();
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        self.advance_time(hold_millis);
        self.move_to(to.0, to.1);
        self.up();
    }
}

impl std::fmt::Debug for GestureRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureRobot")
            .field("layout", &self.layout)
            .field("pointer", &self.pointer)
            .field("now_millis", &self.clock.now_millis())
            .finish()
    }
}
