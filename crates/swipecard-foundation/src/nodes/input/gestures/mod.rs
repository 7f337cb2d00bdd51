pub mod axis;
pub mod resistance;
pub mod session;
pub mod swipe;

pub use axis::{classify_axis, AxisLock, SwipeDirection};
pub use resistance::{display_offset, LiveDirections, ResistanceCurve};
pub use session::{GestureSession, SessionUpdate};
pub use swipe::{SwipeEngine, SwipePhase};
