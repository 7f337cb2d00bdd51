//! Haptic feedback contract.
//!
//! The engine calls [`FeedbackSink::pulse`] synchronously and never waits on
//! it. Sinks must be cheap, must not panic, and must degrade to a no-op when
//! the runtime has no vibration capability.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    /// The drag crossed the commit threshold.
    Medium,
    /// The release committed.
    Heavy,
}

pub trait FeedbackSink {
    fn pulse(&self, intensity: HapticIntensity);
}

/// Sink for runtimes without haptics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn pulse(&self, _intensity: HapticIntensity) {}
}

impl<F> FeedbackSink for F
where
    F: Fn(HapticIntensity),
{
    fn pulse(&self, intensity: HapticIntensity) {
        self(intensity)
    }
}
