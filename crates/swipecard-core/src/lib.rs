//! Frame clock and host platform hooks for the swipecard gesture engine.
//!
//! Everything here is single-threaded: a [`FrameClock`] is an `Rc` handle
//! shared by the animations of one card, and the host drains it once per
//! display frame.

mod frame_clock;
pub mod platform;

pub use frame_clock::{
    FrameCallbackId, FrameCallbackRegistration, FrameClock, NextFrame, WeakFrameClock,
};
pub use platform::{Clock, FrameScheduler, SystemClock};

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::platform::{Clock, FrameScheduler};
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
