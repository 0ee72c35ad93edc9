use super::*;

use crate::clock::ManualClock;
use crate::DEFAULT_SCROLL_DURATION_MILLIS;

const FRAME_NANOS: u64 = 16_666_667;

fn manual_scroller(easing: Easing) -> (Scroller, ManualClock) {
    let clock = ManualClock::new();
    let scroller = Scroller::with_easing(Rc::new(clock.clone()), easing);
    (scroller, clock)
}

#[test]
fn new_scroller_is_finished() {
    let (mut scroller, _clock) = manual_scroller(Easing::default());
    assert!(scroller.is_finished());
    assert!(!scroller.compute_scroll_offset());
    assert_eq!(scroller.curr_x(), 0);
}

#[test]
fn linear_scroll_interpolates_then_lands_on_final() {
    let (mut scroller, clock) = manual_scroller(Easing::LinearEasing);
    scroller.start_scroll(0, 300, 100);
    assert!(!scroller.is_finished());
    assert_eq!(scroller.final_x(), 300);

    clock.advance_millis(50);
    assert!(scroller.compute_scroll_offset());
    assert_eq!(scroller.curr_x(), 150);
    assert!(!scroller.is_finished());

    clock.advance_millis(60);
    assert!(scroller.compute_scroll_offset(), "final step still reports progress");
    assert_eq!(scroller.curr_x(), 300);
    assert!(scroller.is_finished());

    assert!(!scroller.compute_scroll_offset());
}

#[test]
fn viscous_fluid_scroll_moves_monotonically_toward_target() {
    let (mut scroller, clock) = manual_scroller(Easing::ViscousFluid);
    scroller.start_scroll(240, -240, DEFAULT_SCROLL_DURATION_MILLIS);

    let mut samples = vec![scroller.curr_x()];
    for _ in 0..32 {
        clock.advance_nanos(FRAME_NANOS);
        if !scroller.compute_scroll_offset() {
            break;
        }
        samples.push(scroller.curr_x());
    }

    assert_eq!(*samples.last().expect("samples recorded"), 0);
    assert!(samples.windows(2).all(|pair| pair[1] <= pair[0]));
    assert!(
        samples.iter().any(|x| *x > 0 && *x < 240),
        "should report intermediate offsets: {samples:?}"
    );
}

#[test]
fn abort_stops_further_steps() {
    let (mut scroller, clock) = manual_scroller(Easing::LinearEasing);
    scroller.start_scroll(0, 200, 200);
    clock.advance_millis(50);
    assert!(scroller.compute_scroll_offset());
    assert_eq!(scroller.curr_x(), 50);

    scroller.abort_animation();
    assert!(scroller.is_finished());
    clock.advance_millis(50);
    assert!(!scroller.compute_scroll_offset());
}

#[test]
fn restart_replaces_running_session() {
    let (mut scroller, clock) = manual_scroller(Easing::LinearEasing);
    scroller.start_scroll(0, 300, 100);
    clock.advance_millis(50);
    scroller.compute_scroll_offset();

    scroller.start_scroll(scroller.curr_x(), -scroller.curr_x(), 100);
    assert_eq!(scroller.final_x(), 0);
    let session = scroller.session().copied().expect("session running");
    assert_eq!(session.start_x, 150);
    assert_eq!(session.delta_x(), -150);

    clock.advance_millis(100);
    assert!(scroller.compute_scroll_offset());
    assert_eq!(scroller.curr_x(), 0);
}

#[test]
fn zero_duration_finishes_on_first_step() {
    let (mut scroller, _clock) = manual_scroller(Easing::LinearEasing);
    scroller.start_scroll(10, 90, 0);
    assert!(scroller.compute_scroll_offset());
    assert_eq!(scroller.curr_x(), 100);
    assert!(scroller.is_finished());
}

#[test]
fn time_passed_tracks_clock() {
    let (mut scroller, clock) = manual_scroller(Easing::LinearEasing);
    assert_eq!(scroller.time_passed_millis(), 0);
    scroller.start_scroll(0, 10, 500);
    clock.advance_millis(42);
    assert_eq!(scroller.time_passed_millis(), 42);
}

#[test]
fn spec_overrides_easing() {
    let (mut scroller, clock) = manual_scroller(Easing::ViscousFluid);
    scroller.start_scroll_with_spec(0, 100, AnimationSpec::linear(100));
    clock.advance_millis(25);
    scroller.compute_scroll_offset();
    assert_eq!(scroller.curr_x(), 25);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::ViscousFluid,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "Start should be ~0 for {easing:?}");
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "End should be ~1 for {easing:?}");
    }
}

#[test]
fn viscous_fluid_front_loads_motion() {
    // Decelerating curve: more than half the distance in the first half.
    assert!(Easing::ViscousFluid.transform(0.5) > 0.5);
    assert!(Easing::ViscousFluid.transform(0.25) < Easing::ViscousFluid.transform(0.5));
}

#[test]
fn animation_spec_default_matches_scroller_defaults() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, DEFAULT_SCROLL_DURATION_MILLIS);
    assert_eq!(spec.easing, Easing::ViscousFluid);
}
