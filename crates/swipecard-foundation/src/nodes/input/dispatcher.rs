//! Glue between one input adapter and one swipe engine.

use super::adapter::{InputAdapter, RawInput};
use super::gestures::SwipeEngine;
use super::types::PointerEvent;

pub struct SwipeInputPipeline {
    adapter: Box<dyn InputAdapter>,
    engine: SwipeEngine,
}

impl SwipeInputPipeline {
    pub fn new(adapter: Box<dyn InputAdapter>, engine: SwipeEngine) -> Self {
        Self { adapter, engine }
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    pub fn adapter(&self) -> &dyn InputAdapter {
        self.adapter.as_ref()
    }

    /// Routes one platform event. Returns `true` when the platform must
    /// suppress its default action (page scroll, text selection).
    pub fn dispatch(&mut self, raw: &RawInput) -> bool {
        match self.adapter.adapt(raw) {
            Some(event) => self.deliver(event),
            None => false,
        }
    }

    /// Cancels the open gesture, if any. Used on detach and window blur.
    pub fn abort(&mut self) {
        if let Some(event) = self.adapter.abort() {
            log::debug!("aborting {:?} gesture", event.source);
            self.deliver(event);
        }
    }

    fn deliver(&self, event: PointerEvent) -> bool {
        self.engine.handle_input(&event);
        event.is_consumed()
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
