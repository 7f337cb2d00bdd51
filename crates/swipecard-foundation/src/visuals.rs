use crate::config::SwipeActions;
use crate::gesture_constants::COMMITTED_ICON_SCALE;
use crate::nodes::input::gestures::SwipeDirection;

/// Everything a renderer needs to paint the card for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeVisuals {
    /// Horizontal card translation in logical pixels.
    pub translate_x: f32,
    /// Side whose action affordance is uncovered.
    pub revealed: Option<SwipeDirection>,
    /// `0.0..=1.0`, reaching `1.0` at the threshold.
    pub reveal_progress: f32,
    pub icon_scale: f32,
    pub label: Option<String>,
}

impl SwipeVisuals {
    pub const REST: SwipeVisuals = SwipeVisuals {
        translate_x: 0.0,
        revealed: None,
        reveal_progress: 0.0,
        icon_scale: 1.0,
        label: None,
    };

    pub(crate) fn compute(
        offset: f32,
        threshold: f32,
        committed: Option<SwipeDirection>,
        actions: &SwipeActions,
    ) -> Self {
        let revealed = SwipeDirection::of_offset(offset);
        let Some(direction) = revealed else {
            return Self::REST;
        };
        let reveal_progress = if threshold > 0.0 {
            (offset.abs() / threshold).min(1.0)
        } else {
            1.0
        };
        let icon_scale = if committed == Some(direction) {
            COMMITTED_ICON_SCALE
        } else {
            1.0
        };
        Self {
            translate_x: offset,
            revealed,
            reveal_progress,
            icon_scale,
            label: actions
                .get(direction)
                .and_then(|action| action.label())
                .map(str::to_owned),
        }
    }
}

impl Default for SwipeVisuals {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
#[path = "tests/visuals_tests.rs"]
mod tests;
