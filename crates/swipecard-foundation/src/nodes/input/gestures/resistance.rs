//! Drag offset to display offset: direction clamp plus rubber-band curve.

use super::axis::SwipeDirection;
use crate::config::SwipeConfig;

/// Which directions have a registered action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LiveDirections {
    pub left: bool,
    pub right: bool,
}

impl LiveDirections {
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };

    pub fn allows(self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
        }
    }

    /// Zeroes `dx` when it points toward a direction without an action.
    pub fn clamp(self, dx: f32) -> f32 {
        match SwipeDirection::of_offset(dx) {
            Some(direction) if !self.allows(direction) => 0.0,
            _ => dx,
        }
    }
}

/// Linear up to the threshold, damped by `resistance_factor` past it, and
/// hard-capped at `max_overscroll`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResistanceCurve {
    pub threshold: f32,
    pub resistance_factor: f32,
    pub max_overscroll: f32,
}

impl ResistanceCurve {
    pub fn from_config(config: &SwipeConfig) -> Self {
        Self {
            threshold: config.threshold,
            resistance_factor: config.resistance_factor,
            max_overscroll: config.max_overscroll(),
        }
    }

    pub fn apply(&self, dx: f32) -> f32 {
        let distance = dx.abs();
        if distance <= self.threshold {
            return dx;
        }
        let resisted = (distance - self.threshold) * self.resistance_factor;
        dx.signum() * (self.threshold + resisted).min(self.max_overscroll)
    }

    /// Direction committed at `display_offset`, if it reached the threshold.
    pub fn committed_direction(&self, display_offset: f32) -> Option<SwipeDirection> {
        if display_offset.abs() >= self.threshold {
            SwipeDirection::of_offset(display_offset)
        } else {
            None
        }
    }
}

/// Display offset for a horizontal drag of `dx`.
pub fn display_offset(dx: f32, curve: &ResistanceCurve, live: LiveDirections) -> f32 {
    curve.apply(live.clamp(dx))
}

#[cfg(test)]
#[path = "tests/resistance_tests.rs"]
mod tests;
