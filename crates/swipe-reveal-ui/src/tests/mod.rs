
use std::rc::Rc;

use swipe_reveal_animation::{AnimationSpec, ManualClock};
use swipe_reveal_foundation::{PointerEvent, PointerEventKind, ViewConfiguration};
use swipe_reveal_ui_graphics::Dp;
use swipe_reveal_ui_layout::ChildView;

use crate::{RevealHost, SwipeRevealConfig, SwipeRevealLayout};

pub(crate) const FRAME_MILLIS: u64 = 16;

/// Records every signal the container sends to its host.
#[derive(Default)]
pub(crate) struct TestHost {
    pub disallow_requests: Vec<bool>,
    pub invalidations: usize,
    pub default_events: Vec<PointerEventKind>,
    pub default_result: bool,
    pub children_consume: bool,
    pub child_events: Vec<PointerEventKind>,
}

impl TestHost {
    pub fn last_disallow(&self) -> Option<bool> {
        self.disallow_requests.last().copied()
    }
}

impl RevealHost for TestHost {
    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.disallow_requests.push(disallow);
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn default_touch_event(&mut self, event: &PointerEvent) -> bool {
        self.default_events.push(event.kind);
        self.default_result
    }

    fn dispatch_to_children(&mut self, event: &PointerEvent) -> bool {
        self.child_events.push(event.kind);
        self.children_consume
    }
}

pub(crate) fn config_with_slop(slop: f32) -> SwipeRevealConfig {
    SwipeRevealConfig::default()
        .with_view_configuration(ViewConfiguration::default().with_touch_slop(Dp(slop)))
}

/// Two horizontal children, right pane measured at `right_width`.
pub(crate) fn reveal_layout(
    config: SwipeRevealConfig,
    right_width: i32,
) -> (SwipeRevealLayout, ManualClock) {
    let clock = ManualClock::new();
    let mut layout = SwipeRevealLayout::with_config_and_clock(config, Rc::new(clock.clone()))
        .expect("valid config");
    layout.add_child(ChildView::new().with_measured_width(360));
    layout.add_child(ChildView::new().with_measured_width(right_width));
    layout.finish_inflate();
    (layout, clock)
}

pub(crate) fn linear_config(slop: f32) -> SwipeRevealConfig {
    config_with_slop(slop).with_scroll_animation(AnimationSpec::linear(160))
}

/// Pumps frames until the snap animation stops. Returns the offsets seen.
pub(crate) fn run_animation(
    layout: &mut SwipeRevealLayout,
    host: &mut TestHost,
    clock: &ManualClock,
) -> Vec<i32> {
    let mut offsets = Vec::new();
    for _ in 0..64 {
        clock.advance_millis(FRAME_MILLIS);
        if !layout.compute_scroll(host) {
            break;
        }
        offsets.push(layout.scroll_offset());
    }
    offsets
}
