//! Testing utilities and harness for swipecard gestures

pub mod recording;
pub mod testing;

pub use recording::{LifecycleEvent, RecordingFeedback};
pub use testing::*;

pub mod prelude {
    pub use crate::recording::{LifecycleEvent, RecordingFeedback};
    pub use crate::testing::*;
}
