use std::cell::RefCell;
use std::rc::Rc;

use swipecard_core::FrameClock;
use swipecard_foundation::{
    ConfigError, HapticIntensity, InputSource, Point, PointerEvent, PointerPhase, SwipeAction,
    SwipeActions, SwipeCallbacks, SwipeConfig, SwipeDirection, SwipeEngine, SwipePhase,
};

use crate::recording::{LifecycleEvent, RecordingFeedback};

/// Frame interval used by [`SwipeTestRule::pump_until_idle`].
pub const FRAME_INTERVAL_MILLIS: u64 = 16;

const NANOS_PER_MILLI: u64 = 1_000_000;
const DEFAULT_ORIGIN: Point = Point::new(200.0, 300.0);
const SWIPE_STEPS: u32 = 8;

/// Headless harness for driving a swipe engine in tests.
///
/// Owns a manually drained [`FrameClock`], records haptic pulses, committed
/// actions and lifecycle callbacks, and samples the card offset after every
/// frame. Pointer positions are touch events in logical pixels.
pub struct SwipeTestRule {
    clock: FrameClock,
    engine: SwipeEngine,
    feedback: RecordingFeedback,
    commits: Rc<RefCell<Vec<SwipeDirection>>>,
    lifecycle: Rc<RefCell<Vec<LifecycleEvent>>>,
    origin: Point,
    pointer: Point,
    frame_time_nanos: u64,
    offset_samples: Vec<f32>,
}

impl SwipeTestRule {
    /// Default configuration with actions registered for both directions.
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default()).expect("default swipe configuration is valid")
    }

    pub fn with_config(config: SwipeConfig) -> Result<Self, ConfigError> {
        let clock = FrameClock::new();
        let feedback = RecordingFeedback::new();
        let commits = Rc::new(RefCell::new(Vec::new()));
        let lifecycle = Rc::new(RefCell::new(Vec::new()));

        let engine = SwipeEngine::new(
            config,
            recording_actions(&commits, true, true),
            Rc::new(feedback.clone()),
            clock.clone(),
        )?;
        let started = lifecycle.clone();
        let ended = lifecycle.clone();
        engine.set_callbacks(
            SwipeCallbacks::new()
                .on_swipe_start(move || started.borrow_mut().push(LifecycleEvent::SwipeStart))
                .on_swipe_end(move || ended.borrow_mut().push(LifecycleEvent::SwipeEnd)),
        );

        Ok(Self {
            clock,
            engine,
            feedback,
            commits,
            lifecycle,
            origin: DEFAULT_ORIGIN,
            pointer: DEFAULT_ORIGIN,
            frame_time_nanos: 0,
            offset_samples: Vec::new(),
        })
    }

    /// Registers recording actions only for the enabled directions.
    pub fn set_actions_enabled(&self, left: bool, right: bool) {
        self.engine
            .set_actions(recording_actions(&self.commits, left, right));
    }

    pub fn press(&mut self) -> bool {
        self.press_at(DEFAULT_ORIGIN.x, DEFAULT_ORIGIN.y)
    }

    pub fn press_at(&mut self, x: f32, y: f32) -> bool {
        self.origin = Point::new(x, y);
        self.pointer = self.origin;
        self.send(PointerPhase::Start)
    }

    /// Moves to absolute `(x, y)`. Returns whether the engine consumed the move.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.pointer = Point::new(x, y);
        self.send(PointerPhase::Move)
    }

    /// Moves by `(dx, dy)` from the current pointer position.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> bool {
        let target = self.pointer + Point::new(dx, dy);
        self.move_to(target.x, target.y)
    }

    /// Moves to `dx` pixels right of the press position, keeping its height.
    pub fn drag_to(&mut self, dx: f32) -> bool {
        let target = self.origin + Point::new(dx, 0.0);
        self.move_to(target.x, target.y)
    }

    pub fn release(&mut self) -> bool {
        self.send(PointerPhase::End)
    }

    pub fn cancel(&mut self) -> bool {
        self.send(PointerPhase::Cancel)
    }

    /// Press, drag horizontally to `dx` in even steps, release. Does not
    /// advance frames.
    pub fn swipe(&mut self, dx: f32) {
        self.press();
        for step in 1..=SWIPE_STEPS {
            self.drag_to(dx * step as f32 / SWIPE_STEPS as f32);
        }
        self.release();
    }

    /// Advances the clock by `millis` and runs the frame callbacks due.
    pub fn advance_frame(&mut self, millis: u64) {
        self.frame_time_nanos += millis * NANOS_PER_MILLI;
        self.clock.drain_frame_callbacks(self.frame_time_nanos);
        self.offset_samples.push(self.engine.display_offset());
    }

    /// Runs frames until no animation is pending.
    pub fn pump_until_idle(&mut self) {
        let mut i = 0;
        while self.clock.has_frame_callbacks() {
            i += 1;
            if i > 100 {
                panic!("pump_until_idle looped too many times!");
            }
            self.advance_frame(FRAME_INTERVAL_MILLIS);
        }
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn feedback(&self) -> &RecordingFeedback {
        &self.feedback
    }

    pub fn pulses(&self) -> Vec<HapticIntensity> {
        self.feedback.pulses()
    }

    pub fn commits(&self) -> Vec<SwipeDirection> {
        self.commits.borrow().clone()
    }

    pub fn lifecycle(&self) -> Vec<LifecycleEvent> {
        self.lifecycle.borrow().clone()
    }

    /// Card offset after each advanced frame, oldest first.
    pub fn offset_samples(&self) -> &[f32] {
        &self.offset_samples
    }

    pub fn display_offset(&self) -> f32 {
        self.engine.display_offset()
    }

    pub fn phase(&self) -> SwipePhase {
        self.engine.phase()
    }

    fn send(&mut self, phase: PointerPhase) -> bool {
        let event = PointerEvent::new(phase, self.pointer, InputSource::Touch);
        self.engine.handle_input(&event);
        log::trace!(
            "test input {:?} at {:?} -> offset {:.1}",
            phase,
            self.pointer,
            self.engine.display_offset()
        );
        event.is_consumed()
    }
}

impl Default for SwipeTestRule {
    fn default() -> Self {
        Self::new()
    }
}

fn recording_actions(
    commits: &Rc<RefCell<Vec<SwipeDirection>>>,
    left: bool,
    right: bool,
) -> SwipeActions {
    let mut actions = SwipeActions::new();
    if left {
        let commits = commits.clone();
        actions = actions.with_left(
            SwipeAction::new(move || commits.borrow_mut().push(SwipeDirection::Left))
                .with_label("left"),
        );
    }
    if right {
        let commits = commits.clone();
        actions = actions.with_right(
            SwipeAction::new(move || commits.borrow_mut().push(SwipeDirection::Right))
                .with_label("right"),
        );
    }
    actions
}

/// Convenience helper for tests that only need temporary access to a
/// `SwipeTestRule`.
pub fn run_swipe_test<R>(f: impl FnOnce(&mut SwipeTestRule) -> R) -> R {
    let mut rule = SwipeTestRule::new();
    f(&mut rule)
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
