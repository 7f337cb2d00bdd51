use super::*;

fn settle(card: &DemoCard, time: &mut u64) {
    let mut frames = 0;
    while card.clock().has_frame_callbacks() {
        frames += 1;
        assert!(frames < 100, "animation never finished");
        *time += 16_000_000;
        card.clock().drain_frame_callbacks(*time);
    }
}

fn outcome(name: &str) -> Vec<String> {
    let card = DemoCard::new(FrameClock::new()).expect("default config");
    let gesture = demo_gestures()
        .into_iter()
        .find(|gesture| gesture.name == name)
        .expect("known gesture");
    let mut time = 0;
    card.perform(&gesture);
    settle(&card, &mut time);
    assert!(card.engine().is_idle());
    assert_eq!(card.engine().display_offset(), 0.0);
    card.take_events()
}

#[test]
fn scripted_gestures_reach_expected_outcomes() {
    assert_eq!(
        outcome("short drag snaps back"),
        vec!["swipe start", "swipe end"]
    );
    assert_eq!(
        outcome("swipe right to archive"),
        vec!["swipe start", "haptic Medium", "haptic Heavy", "archived", "swipe end"]
    );
    assert_eq!(
        outcome("swipe left to delete"),
        vec!["swipe start", "haptic Medium", "haptic Heavy", "deleted", "swipe end"]
    );
    assert_eq!(
        outcome("cross then change of mind"),
        vec!["swipe start", "haptic Medium", "swipe end"]
    );
    assert_eq!(
        outcome("vertical scroll is left alone"),
        vec!["swipe start", "swipe end"]
    );
    assert_eq!(
        outcome("cancelled by the system"),
        vec!["swipe start", "haptic Medium", "swipe end"]
    );
}

#[test]
fn bar_marks_rest_and_offset() {
    let rest = render_bar(&SwipeVisuals::REST);
    assert_eq!(rest.chars().count(), BAR_WIDTH);
    assert_eq!(rest.chars().nth(BAR_WIDTH / 2), Some('#'));

    let visuals = SwipeVisuals {
        translate_x: 400.0,
        revealed: None,
        reveal_progress: 1.0,
        icon_scale: 1.2,
        label: Some("Archive".into()),
    };
    let line = render_bar(&visuals);
    assert!(line.starts_with(&format!("{}|", ".".repeat(BAR_WIDTH / 2))));
    assert!(line.contains("#"));
    assert!(line.ends_with("Archive 100% !"));
}
