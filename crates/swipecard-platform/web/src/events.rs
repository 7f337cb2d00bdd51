//! DOM events to [`RawInput`], in client (CSS pixel) coordinates.

use swipecard_foundation::nodes::input::{
    MouseEventKind, PointerButton, PointerButtons, RawMouseEvent, RawTouchEvent, TouchEventKind,
    TouchPoint,
};
use swipecard_foundation::{Point, RawInput};
use web_sys::{MouseEvent, TouchEvent, TouchList};

const DOM_BUTTONS: [PointerButton; 5] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
    PointerButton::Back,
    PointerButton::Forward,
];

pub fn touch_input(event: &TouchEvent) -> Option<RawInput> {
    let mut raw = RawTouchEvent::new(touch_kind(&event.type_())?);
    for point in touch_points(&event.touches()) {
        raw = raw.with_touch(point);
    }
    for point in touch_points(&event.changed_touches()) {
        raw = raw.with_changed(point);
    }
    Some(RawInput::Touch(raw))
}

pub fn mouse_input(event: &MouseEvent) -> Option<RawInput> {
    let kind = mouse_kind(&event.type_())?;
    let position = Point::new(event.client_x() as f32, event.client_y() as f32);
    let raw = RawMouseEvent::new(kind, position)
        .with_button(button_from_dom(event.button()))
        .with_buttons(buttons_from_dom(event.buttons()));
    Some(RawInput::Mouse(raw))
}

fn touch_points(list: &TouchList) -> impl Iterator<Item = TouchPoint> + '_ {
    (0..list.length()).filter_map(move |index| {
        let touch = list.get(index)?;
        Some(TouchPoint::new(
            touch.identifier(),
            Point::new(touch.client_x() as f32, touch.client_y() as f32),
        ))
    })
}

pub(crate) fn touch_kind(event_type: &str) -> Option<TouchEventKind> {
    match event_type {
        "touchstart" => Some(TouchEventKind::Start),
        "touchmove" => Some(TouchEventKind::Move),
        "touchend" => Some(TouchEventKind::End),
        "touchcancel" => Some(TouchEventKind::Cancel),
        _ => None,
    }
}

pub(crate) fn mouse_kind(event_type: &str) -> Option<MouseEventKind> {
    match event_type {
        "mousedown" => Some(MouseEventKind::Down),
        "mousemove" => Some(MouseEventKind::Move),
        "mouseup" => Some(MouseEventKind::Up),
        _ => None,
    }
}

/// `MouseEvent.button` numbering. Unknown buttons map to `Forward` so they
/// can never start a session.
pub(crate) fn button_from_dom(button: i16) -> PointerButton {
    usize::try_from(button)
        .ok()
        .and_then(|index| DOM_BUTTONS.get(index).copied())
        .unwrap_or(PointerButton::Forward)
}

/// `MouseEvent.buttons` bitmask; bit order matches [`PointerButton`].
pub(crate) fn buttons_from_dom(mask: u16) -> PointerButtons {
    DOM_BUTTONS
        .iter()
        .filter(|button| mask & (1 << (**button as u8)) != 0)
        .fold(PointerButtons::NONE, |held, button| held.with(*button))
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
