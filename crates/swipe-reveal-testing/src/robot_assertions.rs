//! Assertion helpers for robot tests.

use swipe_reveal_ui::RevealState;

use crate::robot::GestureRobot;

/// Assert that the container is at rest in `state`: no drag, no animation
/// and the offset at that state's edge.
pub fn assert_settled(robot: &GestureRobot, state: RevealState, msg: &str) {
    let layout = robot.layout();
    assert_eq!(layout.state(), state, "{}: state", msg);
    assert!(!layout.is_dragging(), "{}: still dragging", msg);
    assert!(!layout.is_animating(), "{}: still animating", msg);
    assert_eq!(
        layout.scroll_offset(),
        state.rest_offset(layout.right_pane_width()),
        "{}: offset",
        msg
    );
}

/// Assert that a sequence of offsets only moves toward `target`.
pub fn assert_monotonic_toward(offsets: &[i32], target: i32, msg: &str) {
    for pair in offsets.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(
            (after - target).abs() <= (before - target).abs(),
            "{}: {} -> {} moved away from {} in {:?}",
            msg,
            before,
            after,
            target,
            offsets
        );
    }
}
