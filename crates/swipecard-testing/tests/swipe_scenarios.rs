use swipecard_animation::AnimationEnd;
use swipecard_foundation::{AxisLock, HapticIntensity, SwipeConfig, SwipeDirection, SwipePhase};
use swipecard_testing::{LifecycleEvent, SwipeTestRule};

#[test]
fn crossing_and_returning_snaps_back_with_one_medium_pulse() {
    let mut rule = SwipeTestRule::new();
    rule.press();
    rule.drag_to(120.0);
    rule.drag_to(40.0);
    rule.release();
    rule.pump_until_idle();

    assert!(rule.commits().is_empty());
    assert_eq!(rule.pulses(), vec![HapticIntensity::Medium]);
    assert_eq!(rule.display_offset(), 0.0);
    assert_eq!(rule.phase(), SwipePhase::Idle);
}

#[test]
fn release_past_threshold_commits_right_once() {
    let mut rule = SwipeTestRule::new();
    rule.press();
    rule.drag_to(120.0);
    rule.release();
    rule.pump_until_idle();

    assert_eq!(rule.commits(), vec![SwipeDirection::Right]);
    assert_eq!(rule.feedback().count(HapticIntensity::Heavy), 1);
    assert_eq!(rule.display_offset(), 0.0);
    let peak = rule
        .offset_samples()
        .iter()
        .copied()
        .fold(f32::MIN, f32::max);
    assert!(peak > 900.0 && peak <= 1024.0, "peak {peak}");
}

#[test]
fn commit_decision_is_deterministic_at_threshold() {
    let mut exact = SwipeTestRule::new();
    exact.press();
    exact.drag_to(100.0);
    exact.release();
    exact.pump_until_idle();
    assert_eq!(exact.commits(), vec![SwipeDirection::Right]);

    let mut short = SwipeTestRule::new();
    short.press();
    short.drag_to(99.9);
    short.release();
    short.pump_until_idle();
    assert!(short.commits().is_empty());
}

#[test]
fn resistance_scenarios() {
    let mut rule = SwipeTestRule::new();
    rule.press();
    rule.drag_to(150.0);
    assert!((rule.display_offset() - 115.0).abs() < 1e-3);
    rule.drag_to(300.0);
    assert!((rule.display_offset() - 150.0).abs() < 1e-3);
}

#[test]
fn jitter_inside_deadzone_never_moves_card() {
    let mut rule = SwipeTestRule::new();
    rule.press_at(50.0, 50.0);
    for (dx, dy) in [(2.0, 1.0), (-6.0, 4.0), (9.0, -9.0), (10.0, 10.0), (-3.0, 0.0)] {
        assert!(!rule.move_to(50.0 + dx, 50.0 + dy));
        assert_eq!(rule.engine().axis_lock(), AxisLock::Undetermined);
        assert_eq!(rule.display_offset(), 0.0);
    }
    rule.release();
    assert_eq!(rule.phase(), SwipePhase::Idle);
    assert!(rule.commits().is_empty());
}

#[test]
fn vertical_lock_survives_later_horizontal_motion() {
    let mut rule = SwipeTestRule::new();
    rule.press();
    assert!(!rule.move_by(3.0, 30.0));
    for _ in 0..5 {
        assert!(!rule.move_by(60.0, 0.0));
        assert_eq!(rule.engine().axis_lock(), AxisLock::Vertical);
        assert_eq!(rule.display_offset(), 0.0);
    }
    rule.release();
    assert!(rule.commits().is_empty());
    assert!(rule.pulses().is_empty());
}

#[test]
fn offset_stays_within_overscroll_cap() {
    let mut rule = SwipeTestRule::new();
    let cap = SwipeConfig::default().max_overscroll();
    rule.press();
    let mut dx = -900.0;
    while dx <= 900.0 {
        rule.drag_to(dx);
        assert!(rule.display_offset().abs() <= cap + 1e-4, "dx={dx}");
        dx += 37.0;
    }
}

#[test]
fn missing_handler_clamps_direction() {
    let mut rule = SwipeTestRule::new();
    rule.set_actions_enabled(false, true);
    rule.press();
    for dx in [-15.0, -80.0, -200.0, -400.0] {
        rule.drag_to(dx);
        assert_eq!(rule.display_offset(), 0.0);
    }
    rule.release();
    assert_eq!(rule.phase(), SwipePhase::Idle);
    assert!(rule.commits().is_empty());
}

#[test]
fn every_terminal_path_resets_to_rest() {
    let mut rule = SwipeTestRule::new();

    rule.swipe(140.0);
    rule.pump_until_idle();
    rule.swipe(50.0);
    rule.pump_until_idle();
    rule.press();
    rule.drag_to(-130.0);
    rule.cancel();
    rule.pump_until_idle();

    assert_eq!(rule.phase(), SwipePhase::Idle);
    assert_eq!(rule.display_offset(), 0.0);
    assert_eq!(rule.engine().committed_direction(), None);
    assert!(rule.engine().session().is_none());
    assert_eq!(rule.commits(), vec![SwipeDirection::Right]);
    assert_eq!(
        rule.lifecycle(),
        vec![
            LifecycleEvent::SwipeStart,
            LifecycleEvent::SwipeEnd,
            LifecycleEvent::SwipeStart,
            LifecycleEvent::SwipeEnd,
            LifecycleEvent::SwipeStart,
            LifecycleEvent::SwipeEnd,
        ]
    );
}

#[test]
fn new_gestures_wait_for_the_release_animation() {
    let mut rule = SwipeTestRule::new();
    rule.swipe(150.0);
    rule.advance_frame(16);
    rule.advance_frame(16);

    rule.swipe(-150.0);
    assert_eq!(rule.phase(), SwipePhase::Committing);
    rule.pump_until_idle();
    assert_eq!(rule.commits(), vec![SwipeDirection::Right]);

    rule.swipe(-150.0);
    rule.pump_until_idle();
    assert_eq!(rule.commits(), vec![SwipeDirection::Right, SwipeDirection::Left]);
}

#[test]
fn re_crossing_the_threshold_pulses_again() {
    let mut rule = SwipeTestRule::new();
    rule.press();
    rule.drag_to(110.0);
    rule.drag_to(60.0);
    rule.drag_to(110.0);
    rule.drag_to(-110.0);
    assert_eq!(
        rule.pulses(),
        vec![
            HapticIntensity::Medium,
            HapticIntensity::Medium,
            HapticIntensity::Medium
        ]
    );
}

#[test]
fn disabled_card_ignores_gestures() {
    let mut rule = SwipeTestRule::with_config(SwipeConfig::default().with_disabled(true))
        .expect("valid config");
    rule.swipe(200.0);
    rule.pump_until_idle();
    assert!(rule.commits().is_empty());
    assert!(rule.lifecycle().is_empty());

    rule.engine().set_disabled(false);
    rule.swipe(200.0);
    rule.pump_until_idle();
    assert_eq!(rule.commits(), vec![SwipeDirection::Right]);
}

#[test]
fn release_completion_is_observable() {
    let mut rule = SwipeTestRule::new();
    rule.swipe(-180.0);
    let handle = rule
        .engine()
        .pending_release()
        .expect("commit animation running");
    rule.advance_frame(16);
    assert!(!handle.is_complete());
    rule.pump_until_idle();
    assert_eq!(handle.result(), Some(AnimationEnd::Finished));
}

#[test]
fn custom_release_duration_is_respected() {
    let config = SwipeConfig::default().with_release_animation(
        swipecard_animation::AnimationSpec::linear(64),
    );
    let mut rule = SwipeTestRule::with_config(config).expect("valid config");
    rule.swipe(80.0);
    rule.pump_until_idle();
    // first frame pins the start time, then four 16 ms frames cover 64 ms
    assert_eq!(rule.offset_samples().len(), 5);
}
