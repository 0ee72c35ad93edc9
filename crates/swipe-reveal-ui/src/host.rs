//! Services the host framework provides to a reveal container.

use swipe_reveal_foundation::PointerEvent;

/// The container's view of its surroundings.
///
/// Every gesture and animation entry point receives the host explicitly,
/// the same way modifier nodes receive their node context.
pub trait RevealHost {
    /// Asks the ancestor chain not to steal (`true`) or allows it to steal
    /// (`false`) the current gesture.
    fn request_disallow_intercept(&mut self, disallow: bool);

    /// Schedules a redraw. While an animation runs, the redraw is expected
    /// to call `SwipeRevealLayout::compute_scroll` again.
    fn invalidate(&mut self);

    /// Base container touch handling, used whenever the reveal logic
    /// declines an event.
    fn default_touch_event(&mut self, _event: &PointerEvent) -> bool {
        false
    }

    /// Delivers an event to the children. Returns true if one consumed it.
    fn dispatch_to_children(&mut self, _event: &PointerEvent) -> bool {
        false
    }
}
