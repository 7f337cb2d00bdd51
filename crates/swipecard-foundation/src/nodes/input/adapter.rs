//! Touch and mouse streams normalized into one single-pointer stream.
//!
//! Platform bindings translate their native events into [`RawInput`] and
//! feed them to the adapter chosen by [`select_adapter`]. An adapter emits at
//! most one [`PointerEvent`] per raw event and guarantees that every `Start`
//! is followed by exactly one terminal `End` or `Cancel`.

use smallvec::SmallVec;

use super::types::{InputSource, PointerButton, PointerButtons, PointerEvent, PointerId, PointerPhase};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEventKind {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub identifier: i32,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(identifier: i32, position: Point) -> Self {
        Self {
            identifier,
            position,
        }
    }
}

/// Touch event in DOM terms: `touches` lists every point still on the
/// surface, `changed` the points this event is about.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTouchEvent {
    pub kind: TouchEventKind,
    pub touches: SmallVec<[TouchPoint; 2]>,
    pub changed: SmallVec<[TouchPoint; 2]>,
}

impl RawTouchEvent {
    pub fn new(kind: TouchEventKind) -> Self {
        Self {
            kind,
            touches: SmallVec::new(),
            changed: SmallVec::new(),
        }
    }

    pub fn with_touch(mut self, point: TouchPoint) -> Self {
        self.touches.push(point);
        self
    }

    pub fn with_changed(mut self, point: TouchPoint) -> Self {
        self.changed.push(point);
        self
    }

    fn find(&self, identifier: i32) -> Option<TouchPoint> {
        self.changed
            .iter()
            .chain(self.touches.iter())
            .find(|point| point.identifier == identifier)
            .copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Down,
    Move,
    Up,
}

/// Mouse event in client coordinates. `button` is the button that changed
/// (meaningful for `Down`/`Up`), `buttons` the set held after the event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawMouseEvent {
    pub kind: MouseEventKind,
    pub position: Point,
    pub button: PointerButton,
    pub buttons: PointerButtons,
}

impl RawMouseEvent {
    pub fn new(kind: MouseEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            button: PointerButton::Primary,
            buttons: PointerButtons::NONE,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    Touch(RawTouchEvent),
    Mouse(RawMouseEvent),
}

/// Turns one platform event family into normalized pointer events.
pub trait InputAdapter {
    fn source(&self) -> InputSource;

    /// Normalizes `raw`, returning `None` for events that do not belong to
    /// the current session (hover, secondary touches, the other family).
    fn adapt(&mut self, raw: &RawInput) -> Option<PointerEvent>;

    /// Ends an open session with `Cancel` (element detached, window blur).
    /// Returns `None` when no session is open.
    fn abort(&mut self) -> Option<PointerEvent>;

    fn is_active(&self) -> bool;
}

/// What the runtime supports, detected once by the platform binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    pub touch: bool,
}

impl InputCapabilities {
    pub fn touch() -> Self {
        Self { touch: true }
    }

    pub fn mouse_only() -> Self {
        Self { touch: false }
    }
}

pub fn select_adapter(capabilities: InputCapabilities) -> Box<dyn InputAdapter> {
    if capabilities.touch {
        log::debug!("touch input detected; using touch adapter");
        Box::new(TouchAdapter::new())
    } else {
        log::debug!("no touch input detected; using mouse adapter");
        Box::new(MouseAdapter::new())
    }
}

#[derive(Clone, Copy, Debug)]
struct TrackedTouch {
    identifier: i32,
    last_position: Point,
}

/// Follows the first touch placed on an idle surface and ignores the rest.
#[derive(Debug, Default)]
pub struct TouchAdapter {
    tracked: Option<TrackedTouch>,
}

impl TouchAdapter {
    pub fn new() -> Self {
        Self { tracked: None }
    }

    fn emit(phase: PointerPhase, identifier: i32, position: Point) -> PointerEvent {
        PointerEvent::new(phase, position, InputSource::Touch).with_id(identifier as PointerId)
    }

    fn adapt_touch(&mut self, event: &RawTouchEvent) -> Option<PointerEvent> {
        match (event.kind, self.tracked) {
            (TouchEventKind::Start, None) => {
                let first = event.changed.first().or_else(|| event.touches.first())?;
                self.tracked = Some(TrackedTouch {
                    identifier: first.identifier,
                    last_position: first.position,
                });
                Some(Self::emit(PointerPhase::Start, first.identifier, first.position))
            }
            (TouchEventKind::Start, Some(_)) => None,
            (TouchEventKind::Move, Some(mut tracked)) => {
                let point = event.find(tracked.identifier)?;
                tracked.last_position = point.position;
                self.tracked = Some(tracked);
                Some(Self::emit(PointerPhase::Move, point.identifier, point.position))
            }
            (TouchEventKind::End, Some(tracked)) => {
                let lifted = event
                    .changed
                    .iter()
                    .find(|point| point.identifier == tracked.identifier);
                let still_down = event
                    .touches
                    .iter()
                    .any(|point| point.identifier == tracked.identifier);
                match lifted {
                    Some(point) => {
                        self.tracked = None;
                        Some(Self::emit(PointerPhase::End, point.identifier, point.position))
                    }
                    // Lost without being reported (browsers drop ends on detach).
                    None if !still_down => {
                        self.tracked = None;
                        Some(Self::emit(
                            PointerPhase::End,
                            tracked.identifier,
                            tracked.last_position,
                        ))
                    }
                    None => None,
                }
            }
            (TouchEventKind::Cancel, Some(tracked)) => {
                self.tracked = None;
                let position = event
                    .find(tracked.identifier)
                    .map(|point| point.position)
                    .unwrap_or(tracked.last_position);
                Some(Self::emit(PointerPhase::Cancel, tracked.identifier, position))
            }
            (_, None) => None,
        }
    }
}

impl InputAdapter for TouchAdapter {
    fn source(&self) -> InputSource {
        InputSource::Touch
    }

    fn adapt(&mut self, raw: &RawInput) -> Option<PointerEvent> {
        match raw {
            RawInput::Touch(event) => self.adapt_touch(event),
            RawInput::Mouse(_) => None,
        }
    }

    fn abort(&mut self) -> Option<PointerEvent> {
        let tracked = self.tracked.take()?;
        Some(Self::emit(
            PointerPhase::Cancel,
            tracked.identifier,
            tracked.last_position,
        ))
    }

    fn is_active(&self) -> bool {
        self.tracked.is_some()
    }
}

/// Follows the primary mouse button from press to release.
///
/// Moves and ups are expected from window-level listeners so a release
/// outside the card still closes the session.
#[derive(Debug, Default)]
pub struct MouseAdapter {
    held_at: Option<Point>,
}

impl MouseAdapter {
    pub fn new() -> Self {
        Self { held_at: None }
    }

    fn emit(phase: PointerPhase, position: Point) -> PointerEvent {
        PointerEvent::new(phase, position, InputSource::Mouse)
    }

    fn adapt_mouse(&mut self, event: &RawMouseEvent) -> Option<PointerEvent> {
        match event.kind {
            MouseEventKind::Down => {
                if self.held_at.is_some() || event.button != PointerButton::Primary {
                    return None;
                }
                self.held_at = Some(event.position);
                Some(Self::emit(PointerPhase::Start, event.position))
            }
            MouseEventKind::Move => {
                self.held_at?;
                if event.buttons.contains(PointerButton::Primary) {
                    self.held_at = Some(event.position);
                    Some(Self::emit(PointerPhase::Move, event.position))
                } else {
                    // The release happened somewhere we never heard about.
                    self.held_at = None;
                    Some(Self::emit(PointerPhase::End, event.position))
                }
            }
            MouseEventKind::Up => {
                if event.button != PointerButton::Primary {
                    return None;
                }
                self.held_at.take()?;
                Some(Self::emit(PointerPhase::End, event.position))
            }
        }
    }
}

impl InputAdapter for MouseAdapter {
    fn source(&self) -> InputSource {
        InputSource::Mouse
    }

    fn adapt(&mut self, raw: &RawInput) -> Option<PointerEvent> {
        match raw {
            RawInput::Mouse(event) => self.adapt_mouse(event),
            RawInput::Touch(_) => None,
        }
    }

    fn abort(&mut self) -> Option<PointerEvent> {
        let position = self.held_at.take()?;
        Some(Self::emit(PointerPhase::Cancel, position))
    }

    fn is_active(&self) -> bool {
        self.held_at.is_some()
    }
}

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod tests;
