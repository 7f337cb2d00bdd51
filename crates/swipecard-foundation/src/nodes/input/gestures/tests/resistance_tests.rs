use super::*;
use crate::config::SwipeConfig;

fn default_curve() -> ResistanceCurve {
    ResistanceCurve::from_config(&SwipeConfig::default())
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn linear_up_to_threshold() {
    let curve = default_curve();
    assert_eq!(curve.apply(0.0), 0.0);
    assert_eq!(curve.apply(42.0), 42.0);
    assert_eq!(curve.apply(-100.0), -100.0);
}

#[test]
fn resisted_past_threshold() {
    let curve = default_curve();
    assert!(approx_eq(curve.apply(150.0), 115.0));
    assert!(approx_eq(curve.apply(-150.0), -115.0));
}

#[test]
fn capped_at_max_overscroll() {
    let curve = default_curve();
    assert!(approx_eq(curve.max_overscroll, 150.0));
    assert!(approx_eq(curve.apply(300.0), 150.0));
    assert!(approx_eq(curve.apply(-10_000.0), -150.0));
}

#[test]
fn output_never_exceeds_cap() {
    let curve = default_curve();
    let mut dx = -2_000.0;
    while dx <= 2_000.0 {
        assert!(curve.apply(dx).abs() <= curve.max_overscroll + 1e-4, "dx={dx}");
        dx += 7.3;
    }
}

#[test]
fn monotonic_with_shrinking_slope() {
    let curve = default_curve();
    // Strictly increasing only below the cap, which the defaults reach at ~266.7.
    let step = 5.0;
    let mut previous = curve.apply(0.0);
    let mut previous_slope = f32::INFINITY;
    let mut dx = step;
    while dx < 265.0 {
        let value = curve.apply(dx);
        let slope = (value - previous) / step;
        assert!(value > previous, "not increasing at dx={dx}");
        assert!(slope <= previous_slope + 1e-4, "slope grew at dx={dx}");
        previous = value;
        previous_slope = slope;
        dx += step;
    }
}

#[test]
fn missing_action_clamps_that_direction() {
    let curve = default_curve();
    let right_only = LiveDirections {
        left: false,
        right: true,
    };
    assert_eq!(display_offset(-80.0, &curve, right_only), 0.0);
    assert_eq!(display_offset(80.0, &curve, right_only), 80.0);
    assert_eq!(display_offset(55.0, &curve, LiveDirections::NONE), 0.0);
    assert!(approx_eq(display_offset(-150.0, &curve, LiveDirections::BOTH), -115.0));
}

#[test]
fn commit_boundary_is_inclusive() {
    let curve = default_curve();
    assert_eq!(curve.committed_direction(100.0), Some(SwipeDirection::Right));
    assert_eq!(curve.committed_direction(-100.0), Some(SwipeDirection::Left));
    assert_eq!(curve.committed_direction(99.9), None);
    assert_eq!(curve.committed_direction(0.0), None);
}

#[test]
fn custom_threshold_scales_curve() {
    let config = SwipeConfig::default()
        .with_threshold(50.0)
        .with_resistance_factor(0.5);
    let curve = ResistanceCurve::from_config(&config);
    assert!(approx_eq(curve.apply(70.0), 60.0));
    assert!(approx_eq(curve.apply(500.0), 75.0));
}
