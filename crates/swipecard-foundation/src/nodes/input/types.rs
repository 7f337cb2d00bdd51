use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl PointerPhase {
    /// `End` and `Cancel` close a session.
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::End | PointerPhase::Cancel)
    }
}

/// Which platform stream produced a normalized event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    Touch,
    Mouse,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// Normalized single-pointer event, the only input shape the swipe engine sees.
///
/// Consumption is shared across clones through an `Rc<Cell>`: the engine
/// consumes horizontal-locked moves, and the platform binding reads the flag
/// back to suppress the browser's default scrolling.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
    pub source: InputSource,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Point, source: InputSource) -> Self {
        Self {
            id: 0,
            phase,
            position,
            source,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as handled; the platform must not apply its default action.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
