use super::*;
use crate::config::SwipeAction;

fn labelled() -> SwipeActions {
    SwipeActions::new()
        .with_left(SwipeAction::new(|| {}).with_label("Delete"))
        .with_right(SwipeAction::new(|| {}))
}

#[test]
fn rest_when_offset_is_zero() {
    let visuals = SwipeVisuals::compute(0.0, 100.0, None, &labelled());
    assert_eq!(visuals, SwipeVisuals::REST);
    assert_eq!(SwipeVisuals::default(), SwipeVisuals::REST);
}

#[test]
fn progress_saturates_at_threshold() {
    let partial = SwipeVisuals::compute(-25.0, 100.0, None, &labelled());
    assert_eq!(partial.revealed, Some(SwipeDirection::Left));
    assert_eq!(partial.reveal_progress, 0.25);
    assert_eq!(partial.label.as_deref(), Some("Delete"));

    let past = SwipeVisuals::compute(-140.0, 100.0, Some(SwipeDirection::Left), &labelled());
    assert_eq!(past.reveal_progress, 1.0);
    assert_eq!(past.translate_x, -140.0);
}

#[test]
fn icon_grows_only_while_committed() {
    let below = SwipeVisuals::compute(90.0, 100.0, None, &labelled());
    assert_eq!(below.icon_scale, 1.0);
    assert_eq!(below.label, None);

    let committed = SwipeVisuals::compute(105.0, 100.0, Some(SwipeDirection::Right), &labelled());
    assert_eq!(committed.icon_scale, COMMITTED_ICON_SCALE);
}
