//! Browser bindings for swipecard.
//!
//! [`SwipeCard::mount`] wires an element to a [`SwipeEngine`]: DOM touch or
//! mouse listeners feed the input pipeline, a `requestAnimationFrame` driver
//! drains the frame clock, `navigator.vibrate` provides haptics, and the
//! card's inline style is repainted after every input and frame.

mod binding;
mod capabilities;
mod events;
mod feedback;
mod frame;

pub use binding::{SwipeBinding, SwipeCard};
pub use capabilities::detect_capabilities;
pub use events::{mouse_input, touch_input};
pub use feedback::VibrationFeedback;
pub use frame::AnimationFrameDriver;

pub use swipecard_foundation::SwipeEngine;

/// Routes `log` records to the browser console and panics to `console.error`.
/// Safe to call more than once.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
        });
    }
}
