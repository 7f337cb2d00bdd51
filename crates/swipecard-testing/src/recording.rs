use std::cell::RefCell;
use std::rc::Rc;

use swipecard_foundation::{FeedbackSink, HapticIntensity};

/// Feedback sink that remembers every pulse it receives.
#[derive(Clone, Default)]
pub struct RecordingFeedback {
    pulses: Rc<RefCell<Vec<HapticIntensity>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> Vec<HapticIntensity> {
        self.pulses.borrow().clone()
    }

    pub fn count(&self, intensity: HapticIntensity) -> usize {
        self.pulses
            .borrow()
            .iter()
            .filter(|pulse| **pulse == intensity)
            .count()
    }

    pub fn clear(&self) {
        self.pulses.borrow_mut().clear();
    }
}

impl FeedbackSink for RecordingFeedback {
    fn pulse(&self, intensity: HapticIntensity) {
        self.pulses.borrow_mut().push(intensity);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    SwipeStart,
    SwipeEnd,
}
