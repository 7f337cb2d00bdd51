use super::*;

#[test]
fn touch_when_either_probe_succeeds() {
    assert!(classify(true, 0).touch);
    assert!(classify(false, 5).touch);
    assert!(classify(true, 10).touch);
}

#[test]
fn mouse_only_without_touch_signals() {
    assert_eq!(classify(false, 0), InputCapabilities::mouse_only());
}
