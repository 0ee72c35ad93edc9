//! A `RevealHost` that records what the container asks of it.

use swipe_reveal_foundation::{PointerEvent, PointerEventKind};
use swipe_reveal_ui::RevealHost;

/// Host double for driving a container outside a real view tree.
///
/// Children are simulated by `children_consume`: when set, every event
/// dispatched to them is reported as consumed.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub disallow_requests: Vec<bool>,
    pub invalidations: usize,
    pub default_events: Vec<PointerEventKind>,
    pub default_result: bool,
    pub children_consume: bool,
    pub child_events: Vec<PointerEventKind>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose children claim every gesture they are offered.
    pub fn with_consuming_children() -> Self {
        Self {
            children_consume: true,
            ..Self::default()
        }
    }

    /// The ancestors' current view of the disallow flag.
    pub fn ancestors_disallowed(&self) -> bool {
        self.disallow_requests.last().copied().unwrap_or(false)
    }

    pub fn child_was_cancelled(&self) -> bool {
        self.child_events.contains(&PointerEventKind::Cancel)
    }
}

impl RevealHost for RecordingHost {
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
