use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use swipecard_core::{FrameClock, FrameScheduler, WeakFrameClock};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Drains a [`FrameClock`] from `requestAnimationFrame`.
///
/// Frames are only requested while the clock has callbacks queued, so an
/// idle card costs nothing.
pub struct AnimationFrameDriver {
    window: Window,
    clock: WeakFrameClock,
    pending: Cell<Option<i32>>,
    callback: Closure<dyn FnMut(f64)>,
    after_frame: RefCell<Option<Rc<dyn Fn()>>>,
}

impl AnimationFrameDriver {
    /// Creates a driver and installs it as `clock`'s scheduler.
    pub fn install(clock: &FrameClock) -> Result<Rc<Self>, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let weak_clock = clock.downgrade();
        let driver = Rc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            let callback = Closure::wrap(Box::new(move |timestamp: f64| {
                if let Some(driver) = weak.upgrade() {
                    driver.on_animation_frame(timestamp);
                }
            }) as Box<dyn FnMut(f64)>);
            Self {
                window,
                clock: weak_clock,
                pending: Cell::new(None),
                callback,
                after_frame: RefCell::new(None),
            }
        });
        clock.set_scheduler(driver.clone());
        Ok(driver)
    }

    /// Runs `hook` after every drained frame; used to repaint.
    pub fn set_after_frame(&self, hook: Rc<dyn Fn()>) {
        *self.after_frame.borrow_mut() = Some(hook);
    }

    pub fn clear_after_frame(&self) {
        self.after_frame.borrow_mut().take();
    }

    fn on_animation_frame(&self, timestamp_millis: f64) {
        self.pending.set(None);
        if let Some(clock) = self.clock.upgrade() {
            clock.drain_frame_callbacks(timestamp_to_nanos(timestamp_millis));
        }
        let hook = self.after_frame.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

impl FrameScheduler for AnimationFrameDriver {
    fn schedule_frame(&self) {
        if self.pending.get().is_some() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

impl Drop for AnimationFrameDriver {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}

/// `requestAnimationFrame` timestamps are fractional milliseconds.
pub(crate) fn timestamp_to_nanos(timestamp_millis: f64) -> u64 {
    (timestamp_millis.max(0.0) * 1_000_000.0) as u64
}

#[cfg(test)]
#[path = "tests/frame_tests.rs"]
mod tests;
