use super::*;

use futures_task::noop_waker;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use swipecard_core::FrameClock;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(clock: &FrameClock, start: u64, frames: usize) -> u64 {
    let mut time = start;
    for _ in 0..frames {
        if !clock.has_frame_callbacks() {
            break;
        }
        time += FRAME_NANOS;
        clock.drain_frame_callbacks(time);
    }
    time
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::FastOutSlowIn,
        Easing::FastOutLinearIn,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start of {:?}", easing);
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {:?}", easing);
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!(value + 1e-4 >= previous, "{:?} must not run backwards", easing);
            previous = value;
        }
    }
}

#[test]
fn ease_out_leads_linear_and_fast_out_linear_in_trails() {
    assert!(Easing::EaseOut.transform(0.5) > 0.5);
    assert!(Easing::FastOutLinearIn.transform(0.5) < 0.5);
}

#[test]
fn animation_spec_default_is_short_ease_out() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 200);
    assert_eq!(spec.easing, Easing::EaseOut);
    assert_eq!(spec.delay_millis, 0);
    assert_eq!(spec.duration_nanos(), 200_000_000);
}

#[test]
fn animate_to_interpolates_over_frames() {
    let clock = FrameClock::new();
    let offset = Animatable::new(0.0f32, clock.clone());
    let handle = offset.animate_to(100.0, AnimationSpec::linear(200));

    assert!(offset.is_running());
    assert_eq!(offset.value(), 0.0);

    let mut samples = Vec::new();
    let mut time = 0;
    for _ in 0..32 {
        if !clock.has_frame_callbacks() {
            break;
        }
        time += FRAME_NANOS;
        clock.drain_frame_callbacks(time);
        samples.push(offset.value());
    }

    assert!(samples.iter().any(|v| *v > 0.0 && *v < 100.0));
    assert!(samples.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(offset.value(), 100.0);
    assert!(!offset.is_running());
    assert_eq!(handle.result(), Some(AnimationEnd::Finished));
}

#[test]
fn run_finishes_after_its_duration() {
    let clock = FrameClock::new();
    let offset = Animatable::new(0.0f32, clock.clone());
    let handle = offset.animate_to(-50.0, AnimationSpec::linear(200));

    clock.drain_frame_callbacks(1_000_000_000);
    assert!(!handle.is_complete());
    clock.drain_frame_callbacks(1_199_000_000);
    assert!(!handle.is_complete());
    clock.drain_frame_callbacks(1_200_000_000);
    assert!(handle.is_complete());
    assert_eq!(offset.value(), -50.0);
}

#[test]
fn delay_holds_start_value() {
    let clock = FrameClock::new();
    let value = Animatable::new(1.0f64, clock.clone());
    let _handle = value.animate_to(2.0, AnimationSpec::linear(100).with_delay(50));

    clock.drain_frame_callbacks(0);
    clock.drain_frame_callbacks(40_000_000);
    assert_eq!(value.value(), 1.0);
    clock.drain_frame_callbacks(100_000_000);
    assert!(value.value() > 1.0 && value.value() < 2.0);
    clock.drain_frame_callbacks(150_000_000);
    assert_eq!(value.value(), 2.0);
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let handle = value.animate_to(10.0, AnimationSpec::linear(0));
    clock.drain_frame_callbacks(5);
    assert_eq!(handle.result(), Some(AnimationEnd::Finished));
    assert_eq!(value.value(), 10.0);
}

#[test]
fn new_target_interrupts_previous_run() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let first = value.animate_to(100.0, AnimationSpec::linear(200));
    let time = run_frames(&clock, 0, 3);
    let midway = value.value();

    let second = value.animate_to(0.0, AnimationSpec::linear(200));
    assert_eq!(first.result(), Some(AnimationEnd::Interrupted));
    assert!(!second.is_complete());

    run_frames(&clock, time, 32);
    assert_eq!(second.result(), Some(AnimationEnd::Finished));
    assert!(midway > 0.0);
    assert_eq!(value.value(), 0.0);
}

#[test]
fn snap_to_interrupts_and_cancels_frames() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let handle = value.animate_to(100.0, AnimationSpec::default());
    value.snap_to(42.0);

    assert_eq!(handle.result(), Some(AnimationEnd::Interrupted));
    assert_eq!(value.value(), 42.0);
    assert_eq!(value.target(), 42.0);
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn stop_keeps_current_value() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let _handle = value.animate_to(100.0, AnimationSpec::linear(200));
    run_frames(&clock, 0, 4);
    let before = value.value();
    value.stop();
    assert_eq!(value.value(), before);
    assert!(!value.is_running());
}

#[test]
fn on_end_listeners_run_in_order_and_late_listeners_fire_immediately() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let handle = value.animate_to(1.0, AnimationSpec::linear(16));
    let log = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second"] {
        let log = Rc::clone(&log);
        handle.on_end(move |end| log.borrow_mut().push((tag, end)));
    }
    run_frames(&clock, 0, 8);

    let late = Rc::clone(&log);
    handle.on_end(move |end| late.borrow_mut().push(("late", end)));

    assert_eq!(
        log.borrow().as_slice(),
        &[
            ("first", AnimationEnd::Finished),
            ("second", AnimationEnd::Finished),
            ("late", AnimationEnd::Finished),
        ]
    );
}

#[test]
fn listener_may_restart_the_animation() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let handle = value.animate_to(10.0, AnimationSpec::linear(16));
    {
        let value = value.clone();
        handle.on_end(move |_| value.snap_to(0.0));
    }
    run_frames(&clock, 0, 8);
    assert_eq!(value.value(), 0.0);
    assert!(!clock.has_frame_callbacks());
}

#[test]
fn handle_is_a_future() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let mut handle = value.animate_to(1.0, AnimationSpec::linear(32));
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    assert!(Pin::new(&mut handle).poll(&mut cx).is_pending());
    run_frames(&clock, 0, 8);
    assert_eq!(
        Pin::new(&mut handle).poll(&mut cx),
        Poll::Ready(AnimationEnd::Finished)
    );
}

#[test]
fn dropping_animatable_stops_frames() {
    let clock = FrameClock::new();
    let value = Animatable::new(0.0f32, clock.clone());
    let _handle = value.animate_to(1.0, AnimationSpec::default());
    assert!(clock.has_frame_callbacks());
    drop(value);
    assert!(!clock.has_frame_callbacks());
}
