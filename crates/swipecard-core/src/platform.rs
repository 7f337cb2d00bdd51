//! Host hooks for frame scheduling and timing.
//!
//! The gesture engine never owns a timer. It registers frame callbacks on a
//! [`FrameClock`](crate::FrameClock) and relies on the host to deliver
//! frames, either from a display-refresh callback (`requestAnimationFrame`)
//! or from a test harness stepping time by hand.

use web_time::Instant;

/// Asks the host for a frame.
///
/// Called by the frame clock whenever its callback queue goes from empty to
/// non-empty. Implementations should coalesce repeated requests into a single
/// pending frame.
pub trait FrameScheduler {
    /// Request that the host deliver a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for hosts that drive frames themselves.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        self.elapsed_nanos(since) / 1_000_000
    }
}

/// Wall clock backed by `web_time::Instant` so it also works on wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        let nanos = since.elapsed().as_nanos();
        u64::try_from(nanos).unwrap_or(u64::MAX)
    }
}
