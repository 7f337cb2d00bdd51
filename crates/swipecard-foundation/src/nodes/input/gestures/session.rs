use super::axis::{classify_axis, AxisLock, SwipeDirection};
use super::resistance::{display_offset, LiveDirections, ResistanceCurve};
use crate::config::SwipeConfig;
use crate::geometry::Point;

/// State of one press-to-release gesture.
///
/// Created on `Start` and discarded on the terminal event, so nothing leaks
/// from one gesture into the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    origin: Point,
    axis_lock: AxisLock,
    raw_offset: f32,
    display_offset: f32,
    committed_direction: Option<SwipeDirection>,
}

/// Result of feeding one move into a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionUpdate {
    pub axis_lock: AxisLock,
    pub display_offset: f32,
    /// Set when this move carried the offset over the threshold into a
    /// direction that was not already committed.
    pub crossed_into: Option<SwipeDirection>,
}

impl GestureSession {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            axis_lock: AxisLock::Undetermined,
            raw_offset: 0.0,
            display_offset: 0.0,
            committed_direction: None,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn axis_lock(&self) -> AxisLock {
        self.axis_lock
    }

    pub fn raw_offset(&self) -> f32 {
        self.raw_offset
    }

    pub fn display_offset(&self) -> f32 {
        self.display_offset
    }

    pub fn committed_direction(&self) -> Option<SwipeDirection> {
        self.committed_direction
    }

    pub fn update(
        &mut self,
        position: Point,
        config: &SwipeConfig,
        live: LiveDirections,
    ) -> SessionUpdate {
        let delta = position - self.origin;
        if self.axis_lock == AxisLock::Undetermined {
            self.axis_lock = classify_axis(delta, config.axis_lock_deadzone);
            if self.axis_lock.is_locked() {
                log::debug!("gesture locked to {:?} axis", self.axis_lock);
            }
        }

        let mut crossed_into = None;
        if self.axis_lock == AxisLock::Horizontal {
            let curve = ResistanceCurve::from_config(config);
            self.raw_offset = delta.x;
            self.display_offset = display_offset(delta.x, &curve, live);

            let committed = curve.committed_direction(self.display_offset);
            if committed.is_some() && committed != self.committed_direction {
                crossed_into = committed;
            }
            self.committed_direction = committed;
            log::trace!(
                "swipe raw={:.1} display={:.1} committed={:?}",
                self.raw_offset,
                self.display_offset,
                self.committed_direction
            );
        }

        SessionUpdate {
            axis_lock: self.axis_lock,
            display_offset: self.display_offset,
            crossed_into,
        }
    }

    /// Direction to commit if the gesture were released now.
    pub fn release_direction(&self, live: LiveDirections) -> Option<SwipeDirection> {
        self.committed_direction
            .filter(|direction| live.allows(*direction))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
