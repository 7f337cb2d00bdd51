//! Axis lock and swipe direction.

use crate::geometry::Point;

/// One-time classification of a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

impl AxisLock {
    pub fn is_locked(self) -> bool {
        self != AxisLock::Undetermined
    }
}

/// Classifies the displacement `delta` from the press position.
///
/// Stays `Undetermined` until one axis moves strictly more than `deadzone`;
/// then the larger absolute displacement wins. A tie goes to `Vertical` so
/// the page keeps scrolling on ambiguous diagonals.
pub fn classify_axis(delta: Point, deadzone: f32) -> AxisLock {
    if delta.max_abs_component() <= deadzone {
        return AxisLock::Undetermined;
    }
    if delta.x.abs() > delta.y.abs() {
        AxisLock::Horizontal
    } else {
        AxisLock::Vertical
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Direction a horizontal offset points toward; `None` for zero.
    pub fn of_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(SwipeDirection::Right)
        } else if offset < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// `+1.0` for right, `-1.0` for left.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
        }
    }
}

#[cfg(test)]
#[path = "tests/axis_tests.rs"]
mod tests;
