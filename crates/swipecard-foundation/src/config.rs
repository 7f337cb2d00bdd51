//! Caller-supplied configuration: tuning values, actions and lifecycle hooks.

use std::fmt;
use std::rc::Rc;

use swipecard_animation::{AnimationSpec, Easing};

use crate::gesture_constants::{
    AXIS_LOCK_DEADZONE, DEFAULT_RESISTANCE_FACTOR, DEFAULT_SWIPE_THRESHOLD, MAX_OVERSCROLL_RATIO,
    RELEASE_ANIMATION_MILLIS,
};
use crate::nodes::input::gestures::{LiveDirections, SwipeDirection};

/// Tuning for one swipeable card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Display offset at which a release commits.
    pub threshold: f32,
    /// Share of drag distance past the threshold that still moves the card.
    pub resistance_factor: f32,
    pub haptics_enabled: bool,
    /// When set, all input is discarded and the card stays at rest.
    pub disabled: bool,
    pub axis_lock_deadzone: f32,
    /// Used for both the commit fly-out and the snap-back.
    pub release_animation: AnimationSpec,
}

impl SwipeConfig {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_resistance_factor(mut self, resistance_factor: f32) -> Self {
        self.resistance_factor = resistance_factor;
        self
    }

    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_axis_lock_deadzone(mut self, deadzone: f32) -> Self {
        self.axis_lock_deadzone = deadzone;
        self
    }

    pub fn with_release_animation(mut self, spec: AnimationSpec) -> Self {
        self.release_animation = spec;
        self
    }

    /// Furthest the card may travel while dragging.
    pub fn max_overscroll(&self) -> f32 {
        self.threshold * MAX_OVERSCROLL_RATIO
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !(0.0..=1.0).contains(&self.resistance_factor) {
            return Err(ConfigError::InvalidResistanceFactor(self.resistance_factor));
        }
        if !self.axis_lock_deadzone.is_finite() || self.axis_lock_deadzone < 0.0 {
            return Err(ConfigError::InvalidDeadzone(self.axis_lock_deadzone));
        }
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
            resistance_factor: DEFAULT_RESISTANCE_FACTOR,
            haptics_enabled: true,
            disabled: false,
            axis_lock_deadzone: AXIS_LOCK_DEADZONE,
            release_animation: AnimationSpec::tween(RELEASE_ANIMATION_MILLIS, Easing::EaseOut),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidThreshold(f32),
    InvalidResistanceFactor(f32),
    InvalidDeadzone(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold(value) => {
                write!(f, "swipe threshold must be a positive number of pixels, got {value}")
            }
            ConfigError::InvalidResistanceFactor(value) => {
                write!(f, "resistance factor must lie in [0, 1], got {value}")
            }
            ConfigError::InvalidDeadzone(value) => {
                write!(f, "axis lock deadzone must be a non-negative number of pixels, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Action bound to one swipe direction.
#[derive(Clone)]
pub struct SwipeAction {
    on_trigger: Rc<dyn Fn()>,
    label: Option<String>,
}

impl SwipeAction {
    pub fn new(on_trigger: impl Fn() + 'static) -> Self {
        Self {
            on_trigger: Rc::new(on_trigger),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Runs the handler. Panics are the caller's and propagate unchanged.
    pub fn trigger(&self) {
        (self.on_trigger)();
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Actions per direction. A missing action disables that direction.
#[derive(Clone, Debug, Default)]
pub struct SwipeActions {
    pub left: Option<SwipeAction>,
    pub right: Option<SwipeAction>,
}

impl SwipeActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_left(mut self, action: SwipeAction) -> Self {
        self.left = Some(action);
        self
    }

    pub fn with_right(mut self, action: SwipeAction) -> Self {
        self.right = Some(action);
        self
    }

    pub fn get(&self, direction: SwipeDirection) -> Option<&SwipeAction> {
        match direction {
            SwipeDirection::Left => self.left.as_ref(),
            SwipeDirection::Right => self.right.as_ref(),
        }
    }

    pub fn live_directions(&self) -> LiveDirections {
        LiveDirections {
            left: self.left.is_some(),
            right: self.right.is_some(),
        }
    }
}

/// Lifecycle notifications for the host.
#[derive(Default)]
pub struct SwipeCallbacks {
    on_swipe_start: Option<Box<dyn Fn()>>,
    on_swipe_end: Option<Box<dyn Fn()>>,
}

impl SwipeCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a gesture starts tracking.
    pub fn on_swipe_start(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_swipe_start = Some(Box::new(callback));
        self
    }

    /// Called whenever the card returns to rest, after a commit or a snap-back.
    pub fn on_swipe_end(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_swipe_end = Some(Box::new(callback));
        self
    }

    pub(crate) fn swipe_started(&self) {
        if let Some(callback) = &self.on_swipe_start {
            callback();
        }
    }

    pub(crate) fn swipe_ended(&self) {
        if let Some(callback) = &self.on_swipe_end {
            callback();
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
