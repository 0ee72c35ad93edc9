//! Full gestures driven through the dispatch pipeline by the robot.

use swipe_reveal_animation::AnimationSpec;
use swipe_reveal_testing::robot_assertions::{assert_monotonic_toward, assert_settled};
use swipe_reveal_testing::{GestureRobot, RecordingHost};
use swipe_reveal_ui::{RevealState, SwipeRevealConfig};

const RIGHT_WIDTH: i32 = 240;

fn robot() -> GestureRobot {
    GestureRobot::new(SwipeRevealConfig::default(), RIGHT_WIDTH)
}

#[test]
fn swipe_left_opens_and_swipe_right_closes() {
    let mut robot = robot();

    robot.drag((300.0, 40.0), (100.0, 40.0), 10);
    assert_eq!(robot.state(), RevealState::Open);
    let offsets = robot.wait_for_idle();
    assert_monotonic_toward(&offsets, RIGHT_WIDTH, "opening");
    assert_settled(&robot, RevealState::Open, "after open swipe");

    robot.drag((100.0, 40.0), (300.0, 40.0), 10);
    assert_eq!(robot.state(), RevealState::Closed);
    let offsets = robot.wait_for_idle();
    assert_monotonic_toward(&offsets, 0, "closing");
    assert_settled(&robot, RevealState::Closed, "after close swipe");
}

#[test]
fn cancel_past_a_third_settles_like_release() {
    let mut robot = robot();

    robot.down(300.0, 40.0);
    for x in [280.0, 250.0, 200.0] {
        robot.pump_frame();
        robot.move_to(x, 40.0);
    }
    assert_eq!(robot.offset(), 100);
    assert!(robot.cancel());

    assert_eq!(robot.state(), RevealState::Open);
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Open, "cancelled drag");
}

#[test]
fn cancel_after_swipe_stolen_from_child_settles_open() {
    let mut robot = robot().with_host(RecordingHost::with_consuming_children());

    robot.down(300.0, 40.0);
    robot.move_to(280.0, 40.0);
    assert!(robot.host().child_was_cancelled());
    assert_eq!(robot.offset(), 0);
    robot.move_to(260.0, 40.0);
    robot.move_to(200.0, 40.0);
    assert_eq!(robot.offset(), 100);

    assert!(robot.cancel());
    assert_eq!(robot.host().child_events.len(), 2);
    assert_eq!(robot.state(), RevealState::Open);
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Open, "cancelled after steal");
}

#[test]
fn short_swipe_snaps_back() {
    let mut robot = robot();

    robot.drag((300.0, 40.0), (250.0, 40.0), 5);
    assert_eq!(robot.offset(), 50);
    assert_eq!(robot.state(), RevealState::Closed);
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Closed, "short swipe");
}

#[test]
fn open_row_needs_a_long_swipe_to_close() {
    let mut robot = robot();
    robot.smooth_open();
    robot.wait_for_idle();

    // 240 -> 180 stays above two thirds of the pane.
    robot.drag((100.0, 40.0), (160.0, 40.0), 3);
    assert_eq!(robot.state(), RevealState::Open);
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Open, "hysteresis keeps it open");

    // 240 -> 150 drops below it.
    robot.drag((100.0, 40.0), (190.0, 40.0), 3);
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Closed, "long swipe closes");
}

#[test]
fn swiping_right_on_closed_row_scrolls_nothing() {
    let mut robot = robot();

    robot.drag((100.0, 40.0), (300.0, 40.0), 10);
    assert_eq!(robot.offset(), 0);
    assert!(!robot.host().default_events.is_empty());
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Closed, "closed edge");
}

#[test]
fn tap_on_child_stays_with_child() {
    let mut robot = robot().with_host(RecordingHost::with_consuming_children());

    assert!(robot.down(50.0, 20.0));
    assert!(robot.up());

    let host = robot.host();
    assert_eq!(host.child_events.len(), 2);
    assert!(!host.child_was_cancelled());
    assert_eq!(host.disallow_requests, vec![true]);
    assert_settled(&robot, RevealState::Closed, "tap");
}

#[test]
fn horizontal_swipe_is_stolen_from_child() {
    let mut robot = robot().with_host(RecordingHost::with_consuming_children());

    robot.drag((300.0, 40.0), (100.0, 40.0), 10);
    assert!(robot.host().child_was_cancelled());
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Open, "stolen swipe");
}

#[test]
fn vertical_scroll_is_handed_to_ancestors() {
    let mut robot = robot().with_host(RecordingHost::with_consuming_children());

    robot.down(100.0, 100.0);
    assert!(robot.host().ancestors_disallowed());
    robot.move_to(102.0, 140.0);
    assert!(!robot.host().ancestors_disallowed());
    assert!(!robot.layout().is_dragging());
    assert!(!robot.host().child_was_cancelled());
    robot.up();
    assert_eq!(robot.offset(), 0);
}

#[test]
fn touch_during_settle_freezes_offset() {
    let config = SwipeRevealConfig::default().with_scroll_animation(AnimationSpec::linear(160));
    let mut robot = GestureRobot::new(config, RIGHT_WIDTH);

    robot.drag((300.0, 40.0), (200.0, 40.0), 5);
    assert_eq!(robot.state(), RevealState::Open);
    robot.pump_frame();
    robot.pump_frame();
    let frozen = robot.offset();
    assert!(frozen > 100 && frozen < RIGHT_WIDTH);

    robot.down(10.0, 10.0);
    assert!(!robot.layout().is_animating());
    robot.up();
    assert!(robot.wait_for_idle().is_empty());
    assert_eq!(robot.offset(), frozen);
    assert_eq!(robot.state(), RevealState::Open);
}

#[test]
fn quick_close_resets_open_row() {
    let mut robot = robot();
    robot.smooth_open();
    robot.wait_for_idle();

    robot.quick_close();
    assert_settled(&robot, RevealState::Closed, "quick close");
    robot.quick_close();
    assert_settled(&robot, RevealState::Closed, "quick close twice");
}

#[test]
fn fast_short_swipe_opens_with_fling_settle() {
    let config = SwipeRevealConfig::default().with_fling_settle(true);
    let mut robot = GestureRobot::new(config, RIGHT_WIDTH);

    robot.drag((300.0, 40.0), (240.0, 40.0), 3);
    assert_eq!(robot.offset(), 60);
    assert_eq!(robot.state(), RevealState::Open);
    robot.wait_for_idle();
    assert_settled(&robot, RevealState::Open, "fling open");
}

#[test]
fn held_release_ignores_fling_settle() {
    let config = SwipeRevealConfig::default().with_fling_settle(true);
    let mut robot = GestureRobot::new(config, RIGHT_WIDTH);

    robot.drag_and_hold((300.0, 40.0), (240.0, 40.0), 3, 120);
    assert_eq!(robot.state(), RevealState::Closed);
}

#[test]
fn fast_short_swipe_without_fling_settle_closes() {
    let mut robot = robot();

    robot.drag((300.0, 40.0), (240.0, 40.0), 3);
    assert_eq!(robot.state(), RevealState::Closed);
}

#[test]
fn three_pane_container_ignores_swipes() {
    use std::rc::Rc;

    use swipe_reveal_animation::ManualClock;
    use swipe_reveal_ui::SwipeRevealLayout;
    use swipe_reveal_ui_layout::ChildView;

    let clock = ManualClock::new();
    let config = SwipeRevealConfig::default();
    let mut layout = SwipeRevealLayout::with_config_and_clock(config, Rc::new(clock.clone()))
        .expect("valid config");
    for width in [200, 100, 100] {
        layout.add_child(ChildView::new().with_measured_width(width));
    }
    layout.finish_inflate();
    let mut robot = GestureRobot::with_layout(layout, clock);

    robot.drag((300.0, 40.0), (100.0, 40.0), 10);
    assert_eq!(robot.offset(), 0);
    assert!(robot.wait_for_idle().is_empty());
    assert!(!robot.host().child_was_cancelled());
}
