//! Swipe-to-act gesture handling for cards.
//!
//! Platform bindings normalize touch or mouse events through an
//! [`InputAdapter`], and a [`SwipeEngine`] turns the resulting pointer stream
//! into a card offset, haptic pulses and, past the threshold, a committed
//! action. Release animations run on a [`swipecard_core::FrameClock`] that the
//! host drains once per display frame.

pub mod config;
pub mod geometry;
pub mod gesture_constants;
pub mod haptics;
pub mod nodes;
pub mod visuals;

pub use config::{ConfigError, SwipeAction, SwipeActions, SwipeCallbacks, SwipeConfig};
pub use geometry::Point;
pub use haptics::{FeedbackSink, HapticIntensity, NoopFeedback};
pub use nodes::input::gestures::{
    AxisLock, GestureSession, LiveDirections, ResistanceCurve, SwipeDirection, SwipeEngine,
    SwipePhase,
};
pub use nodes::input::{
    select_adapter, InputAdapter, InputCapabilities, InputSource, PointerEvent, PointerPhase,
    RawInput, SwipeInputPipeline,
};
pub use visuals::SwipeVisuals;

pub mod prelude {
    pub use crate::config::{SwipeAction, SwipeActions, SwipeCallbacks, SwipeConfig};
    pub use crate::geometry::Point;
    pub use crate::haptics::{FeedbackSink, HapticIntensity};
    pub use crate::nodes::input::prelude::*;
}
