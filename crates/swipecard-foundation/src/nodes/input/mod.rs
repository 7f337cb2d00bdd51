pub mod adapter;
pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use adapter::{
    select_adapter, InputAdapter, InputCapabilities, MouseAdapter, MouseEventKind, RawInput,
    RawMouseEvent, RawTouchEvent, TouchAdapter, TouchEventKind, TouchPoint,
};
pub use dispatcher::SwipeInputPipeline;
pub use types::{
    InputSource, PointerButton, PointerButtons, PointerEvent, PointerId, PointerPhase,
};

pub mod prelude {
    pub use super::adapter::{InputAdapter, RawInput};
    pub use super::gestures::{AxisLock, SwipeDirection, SwipeEngine, SwipePhase};
    pub use super::types::{PointerEvent, PointerPhase};
}
