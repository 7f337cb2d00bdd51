use super::*;

#[test]
fn touch_event_names() {
    assert_eq!(touch_kind("touchstart"), Some(TouchEventKind::Start));
    assert_eq!(touch_kind("touchmove"), Some(TouchEventKind::Move));
    assert_eq!(touch_kind("touchend"), Some(TouchEventKind::End));
    assert_eq!(touch_kind("touchcancel"), Some(TouchEventKind::Cancel));
    assert_eq!(touch_kind("pointerdown"), None);
}

#[test]
fn mouse_event_names() {
    assert_eq!(mouse_kind("mousedown"), Some(MouseEventKind::Down));
    assert_eq!(mouse_kind("mousemove"), Some(MouseEventKind::Move));
    assert_eq!(mouse_kind("mouseup"), Some(MouseEventKind::Up));
    assert_eq!(mouse_kind("click"), None);
}

#[test]
fn dom_button_numbers() {
    assert_eq!(button_from_dom(0), PointerButton::Primary);
    assert_eq!(button_from_dom(1), PointerButton::Secondary);
    assert_eq!(button_from_dom(2), PointerButton::Middle);
    assert_eq!(button_from_dom(-1), PointerButton::Forward);
    assert_eq!(button_from_dom(42), PointerButton::Forward);
}

#[test]
fn dom_buttons_bitmask() {
    assert_eq!(buttons_from_dom(0), PointerButtons::NONE);
    let primary = buttons_from_dom(1);
    assert!(primary.contains(PointerButton::Primary));
    assert!(!primary.contains(PointerButton::Secondary));

    let both = buttons_from_dom(0b11);
    assert!(both.contains(PointerButton::Primary));
    assert!(both.contains(PointerButton::Secondary));
    assert!(!buttons_from_dom(0b10).contains(PointerButton::Primary));
}
