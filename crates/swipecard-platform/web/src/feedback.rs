use swipecard_foundation::{FeedbackSink, HapticIntensity};
use web_sys::Navigator;

/// Haptics through `navigator.vibrate`, or nothing where it is unsupported.
pub struct VibrationFeedback {
    navigator: Option<Navigator>,
}

impl VibrationFeedback {
    /// Looks for `navigator.vibrate` once; later pulses never re-probe.
    pub fn detect() -> Self {
        let navigator = web_sys::window()
            .map(|window| window.navigator())
            .filter(|navigator| {
                js_sys::Reflect::has(navigator.as_ref(), &"vibrate".into()).unwrap_or(false)
            });
        if navigator.is_none() {
            log::debug!("navigator.vibrate unavailable; haptics disabled");
        }
        Self { navigator }
    }

    pub fn is_supported(&self) -> bool {
        self.navigator.is_some()
    }
}

impl FeedbackSink for VibrationFeedback {
    fn pulse(&self, intensity: HapticIntensity) {
        if let Some(navigator) = &self.navigator {
            // `false` means the browser refused, e.g. before any user activation.
            if !navigator.vibrate_with_duration(pulse_millis(intensity)) {
                log::trace!("vibrate({intensity:?}) refused");
            }
        }
    }
}

pub(crate) fn pulse_millis(intensity: HapticIntensity) -> u32 {
    match intensity {
        HapticIntensity::Medium => 10,
        HapticIntensity::Heavy => 20,
    }
}

#[cfg(test)]
#[path = "tests/feedback_tests.rs"]
mod tests;
