//! Snap engine: programmatic open/close and the per-frame scroll step.

use crate::gesture::Motion;
use crate::host::RevealHost;
use crate::state::RevealState;
use crate::swipe_reveal::SwipeRevealLayout;

impl SwipeRevealLayout {
    /// Jumps to closed with no animation.
    pub fn quick_close(&mut self, host: &mut dyn RevealHost) {
        self.end_drag();
        self.scroller.abort_animation();
        self.scroll_to(host, 0);
        log::debug!("quick close");
        self.set_state(RevealState::Closed);
    }

    /// Animates the content back to offset 0. The state reads CLOSED
    /// immediately.
    pub fn smooth_close(&mut self, host: &mut dyn RevealHost) {
        self.animate_to(host, 0);
        self.set_state(RevealState::Closed);
    }

    /// Animates the content to fully reveal the right pane. An unmeasured
    /// right pane counts as width 0. The state reads OPEN immediately.
    pub fn smooth_open(&mut self, host: &mut dyn RevealHost) {
        let width = self.right_pane_width();
        self.animate_to(host, width);
        self.set_state(RevealState::Open);
    }

    /// Per-frame animation step, called from the host's draw pass.
    ///
    /// Returns true if the offset was advanced; another redraw has then
    /// been requested so the next frame steps again.
    pub fn compute_scroll(&mut self, host: &mut dyn RevealHost) -> bool {
        if !self.scroller.compute_scroll_offset() {
            return false;
        }
        let x = self.scroller.curr_x();
        log::trace!("scroll step {} -> {}", self.scroll_x, x);
        self.scroll_x = x;
        host.invalidate();
        true
    }

    fn animate_to(&mut self, host: &mut dyn RevealHost, target: i32) {
        self.end_drag();
        let spec = self.config.scroll_animation;
        log::debug!(
            "snap {} -> {} over {}ms",
            self.scroll_x,
            target,
            spec.duration_millis
        );
        self.scroller
            .start_scroll(self.scroll_x, target - self.scroll_x, spec.duration_millis);
        host.invalidate();
    }

    /// Sets the content offset directly, invalidating on change.
    pub(crate) fn scroll_to(&mut self, host: &mut dyn RevealHost, x: i32) {
        if self.scroll_x != x {
            self.scroll_x = x;
            host.invalidate();
        }
    }

    /// A programmatic snap ends any drag; the gesture's remaining events
    /// are swallowed.
    fn end_drag(&mut self) {
        if matches!(self.motion, Motion::Dragging(_)) {
            self.motion = Motion::Settled;
        }
    }
}
