use super::*;
use swipecard_foundation::FeedbackSink;

#[test]
fn fresh_rule_is_idle() {
    let rule = SwipeTestRule::new();
    assert_eq!(rule.phase(), SwipePhase::Idle);
    assert_eq!(rule.display_offset(), 0.0);
    assert!(rule.pulses().is_empty());
    assert!(rule.commits().is_empty());
    assert!(rule.offset_samples().is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let result = SwipeTestRule::with_config(SwipeConfig::default().with_threshold(f32::INFINITY));
    assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
}

#[test]
fn move_by_is_relative_to_pointer() {
    run_swipe_test(|rule| {
        rule.press_at(10.0, 10.0);
        rule.move_by(20.0, 0.0);
        rule.move_by(20.0, 1.0);
        assert_eq!(rule.display_offset(), 40.0);
    });
}

#[test]
fn swipe_then_pump_records_samples() {
    let mut rule = SwipeTestRule::new();
    rule.swipe(60.0);
    assert_eq!(rule.phase(), SwipePhase::SnappingBack);
    rule.pump_until_idle();
    assert_eq!(rule.phase(), SwipePhase::Idle);
    let samples = rule.offset_samples();
    assert!(!samples.is_empty());
    assert_eq!(samples.last().copied(), Some(0.0));
    assert!(samples.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn pump_without_animation_does_nothing() {
    let mut rule = SwipeTestRule::new();
    rule.pump_until_idle();
    assert!(rule.offset_samples().is_empty());
}

#[test]
fn disabled_directions_stop_recording() {
    let mut rule = SwipeTestRule::new();
    rule.set_actions_enabled(true, false);
    rule.swipe(200.0);
    rule.pump_until_idle();
    assert!(rule.commits().is_empty());

    rule.swipe(-200.0);
    rule.pump_until_idle();
    assert_eq!(rule.commits(), vec![SwipeDirection::Left]);
}

#[test]
fn recording_feedback_counts_by_intensity() {
    let feedback = RecordingFeedback::new();
    feedback.pulse(HapticIntensity::Medium);
    feedback.pulse(HapticIntensity::Medium);
    feedback.pulse(HapticIntensity::Heavy);
    assert_eq!(feedback.count(HapticIntensity::Medium), 2);
    assert_eq!(feedback.count(HapticIntensity::Heavy), 1);
    feedback.clear();
    assert!(feedback.pulses().is_empty());
}
