//! Swipe state machine: `Idle → Tracking → {Committing, SnappingBack} → Idle`.
//!
//! The engine owns at most one [`GestureSession`] and one release animation.
//! Every path out of `Tracking` ends in `Idle` with the card at rest, and no
//! `RefCell` borrow is held while host code (actions, lifecycle callbacks,
//! feedback sinks) runs, so that code may call back into the engine.

use std::cell::RefCell;
use std::rc::Rc;

use swipecard_animation::{Animatable, AnimationHandle};
use swipecard_core::FrameClock;

use super::axis::{AxisLock, SwipeDirection};
use super::session::GestureSession;
use crate::config::{ConfigError, SwipeAction, SwipeActions, SwipeCallbacks, SwipeConfig};
use crate::gesture_constants::DEFAULT_VIEWPORT_WIDTH;
use crate::haptics::{FeedbackSink, HapticIntensity};
use crate::nodes::input::types::{PointerEvent, PointerPhase};
use crate::visuals::SwipeVisuals;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Tracking,
    Committing,
    SnappingBack,
}

enum SwipeState {
    Idle,
    Tracking(GestureSession),
    /// The action is captured at release so later `set_actions` calls cannot
    /// change what fires.
    Committing {
        direction: SwipeDirection,
        action: SwipeAction,
    },
    SnappingBack,
}

impl SwipeState {
    fn phase(&self) -> SwipePhase {
        match self {
            SwipeState::Idle => SwipePhase::Idle,
            SwipeState::Tracking(_) => SwipePhase::Tracking,
            SwipeState::Committing { .. } => SwipePhase::Committing,
            SwipeState::SnappingBack => SwipePhase::SnappingBack,
        }
    }
}

struct EngineCore {
    config: SwipeConfig,
    actions: SwipeActions,
    state: SwipeState,
    viewport_width: f32,
    release: Option<AnimationHandle>,
}

struct Shared {
    core: RefCell<EngineCore>,
    offset: Animatable<f32>,
    feedback: Rc<dyn FeedbackSink>,
    callbacks: RefCell<Rc<SwipeCallbacks>>,
}

/// How a tracking session leaves `Tracking`.
enum Settle {
    Commit {
        direction: SwipeDirection,
        target: f32,
    },
    SnapBack,
    /// Nothing to animate; the card never left rest.
    Rest,
}

/// Swipe gesture engine for one card.
///
/// Cheap to clone; clones share state. Not `Send`: the engine lives on the
/// thread that delivers input and drains the frame clock.
#[derive(Clone)]
pub struct SwipeEngine {
    shared: Rc<Shared>,
}

impl SwipeEngine {
    pub fn new(
        config: SwipeConfig,
        actions: SwipeActions,
        feedback: Rc<dyn FeedbackSink>,
        clock: FrameClock,
    ) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejecting swipe configuration: {err}");
            return Err(err);
        }
        let core = EngineCore {
            config,
            actions,
            state: SwipeState::Idle,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            release: None,
        };
        Ok(Self {
            shared: Rc::new(Shared {
                core: RefCell::new(core),
                offset: Animatable::new(0.0, clock),
                feedback,
                callbacks: RefCell::new(Rc::new(SwipeCallbacks::default())),
            }),
        })
    }

    pub fn with_callbacks(self, callbacks: SwipeCallbacks) -> Self {
        self.set_callbacks(callbacks);
        self
    }

    pub fn set_callbacks(&self, callbacks: SwipeCallbacks) {
        *self.shared.callbacks.borrow_mut() = Rc::new(callbacks);
    }

    /// Feeds one normalized pointer event through the state machine.
    ///
    /// Horizontal-locked moves are consumed on `event`; the platform must then
    /// suppress its default scroll.
    pub fn handle_input(&self, event: &PointerEvent) {
        if self.is_disabled() {
            log::trace!("swipe disabled, dropping {:?}", event.phase);
            return;
        }
        match event.phase {
            PointerPhase::Start => self.begin(event),
            PointerPhase::Move => self.track(event),
            PointerPhase::End => self.settle(true),
            PointerPhase::Cancel => self.settle(false),
        }
    }

    /// Abandons the tracking phase and snaps the card back. No-op otherwise.
    pub fn cancel(&self) {
        self.settle(false);
    }

    pub fn is_disabled(&self) -> bool {
        self.shared.core.borrow().config.disabled
    }

    /// Disabling mid-gesture cancels the session, since its terminal event
    /// would otherwise be discarded.
    pub fn set_disabled(&self, disabled: bool) {
        self.shared.core.borrow_mut().config.disabled = disabled;
        if disabled {
            self.settle(false);
        }
    }

    /// Replaces the tuning. The new values apply from the next move.
    pub fn set_config(&self, config: SwipeConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let disabled = config.disabled;
        self.shared.core.borrow_mut().config = config;
        if disabled {
            self.settle(false);
        }
        Ok(())
    }

    pub fn config(&self) -> SwipeConfig {
        self.shared.core.borrow().config
    }

    pub fn set_actions(&self, actions: SwipeActions) {
        self.shared.core.borrow_mut().actions = actions;
    }

    /// Distance the card travels on commit. Non-positive or non-finite widths
    /// are ignored.
    pub fn set_viewport_width(&self, width: f32) {
        if !width.is_finite() || width <= 0.0 {
            log::warn!("ignoring viewport width {width}");
            return;
        }
        self.shared.core.borrow_mut().viewport_width = width;
    }

    pub fn viewport_width(&self) -> f32 {
        self.shared.core.borrow().viewport_width
    }

    pub fn phase(&self) -> SwipePhase {
        self.shared.core.borrow().state.phase()
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == SwipePhase::Idle
    }

    /// The live session, while tracking.
    pub fn session(&self) -> Option<GestureSession> {
        match &self.shared.core.borrow().state {
            SwipeState::Tracking(session) => Some(*session),
            _ => None,
        }
    }

    pub fn axis_lock(&self) -> AxisLock {
        self.session()
            .map(|session| session.axis_lock())
            .unwrap_or_default()
    }

    /// Current card translation, following the release animation when one runs.
    pub fn display_offset(&self) -> f32 {
        self.shared.offset.value()
    }

    /// Direction a release would commit to; keeps reporting it while the
    /// commit animation runs.
    pub fn committed_direction(&self) -> Option<SwipeDirection> {
        match &self.shared.core.borrow().state {
            SwipeState::Tracking(session) => session.committed_direction(),
            SwipeState::Committing { direction, .. } => Some(*direction),
            SwipeState::Idle | SwipeState::SnappingBack => None,
        }
    }

    pub fn visuals(&self) -> SwipeVisuals {
        let offset = self.display_offset();
        let committed = self.committed_direction();
        let core = self.shared.core.borrow();
        SwipeVisuals::compute(offset, core.config.threshold, committed, &core.actions)
    }

    /// Completion of the commit or snap-back animation in flight.
    pub fn pending_release(&self) -> Option<AnimationHandle> {
        self.shared.core.borrow().release.clone()
    }

    fn begin(&self, event: &PointerEvent) {
        {
            let mut core = self.shared.core.borrow_mut();
            if !matches!(core.state, SwipeState::Idle) {
                log::trace!("ignoring gesture start during {:?}", core.state.phase());
                return;
            }
            core.state = SwipeState::Tracking(GestureSession::new(event.position));
        }
        log::debug!("swipe tracking from {:?}", event.position);
        self.shared.offset.snap_to(0.0);
        let callbacks = self.shared.callbacks.borrow().clone();
        callbacks.swipe_started();
    }

    fn track(&self, event: &PointerEvent) {
        let (update, haptics_enabled) = {
            let mut guard = self.shared.core.borrow_mut();
            let core = &mut *guard;
            let live = core.actions.live_directions();
            let SwipeState::Tracking(session) = &mut core.state else {
                return;
            };
            (
                session.update(event.position, &core.config, live),
                core.config.haptics_enabled,
            )
        };

        if update.axis_lock == AxisLock::Horizontal {
            event.consume();
        }
        self.shared.offset.snap_to(update.display_offset);

        if let Some(direction) = update.crossed_into {
            log::debug!("swipe crossed threshold toward {direction:?}");
            if haptics_enabled {
                self.shared.feedback.pulse(HapticIntensity::Medium);
            }
        }
    }

    /// Leaves `Tracking`. With `allow_commit` unset the session always snaps back.
    fn settle(&self, allow_commit: bool) {
        let (settle, spec, haptics_enabled) = {
            let mut core = self.shared.core.borrow_mut();
            let SwipeState::Tracking(session) = core.state else {
                return;
            };
            let live = core.actions.live_directions();
            let commit = session
                .release_direction(live)
                .filter(|_| allow_commit)
                .and_then(|direction| {
                    core.actions
                        .get(direction)
                        .cloned()
                        .map(|action| (direction, action))
                });

            let settle = match commit {
                Some((direction, action)) => {
                    core.state = SwipeState::Committing { direction, action };
                    Settle::Commit {
                        direction,
                        target: direction.sign() * core.viewport_width,
                    }
                }
                None if session.display_offset() == 0.0 => {
                    core.state = SwipeState::Idle;
                    Settle::Rest
                }
                None => {
                    core.state = SwipeState::SnappingBack;
                    Settle::SnapBack
                }
            };
            (settle, core.config.release_animation, core.config.haptics_enabled)
        };

        let target = match settle {
            Settle::Rest => {
                log::debug!("swipe released at rest");
                self.shared.offset.snap_to(0.0);
                let callbacks = self.shared.callbacks.borrow().clone();
                callbacks.swipe_ended();
                return;
            }
            Settle::SnapBack => {
                log::debug!("swipe snapping back");
                0.0
            }
            Settle::Commit { direction, target } => {
                log::debug!("swipe committing {direction:?}");
                if haptics_enabled {
                    self.shared.feedback.pulse(HapticIntensity::Heavy);
                }
                target
            }
        };

        let handle = self.shared.offset.animate_to(target, spec);
        self.shared.core.borrow_mut().release = Some(handle.clone());
        let weak = Rc::downgrade(&self.shared);
        handle.on_end(move |_| {
            if let Some(shared) = weak.upgrade() {
                Self::finish_release(&shared);
            }
        });
    }

    fn finish_release(shared: &Rc<Shared>) {
        let action = {
            let core = shared.core.borrow();
            match &core.state {
                SwipeState::Committing { action, .. } => Some(action.clone()),
                SwipeState::SnappingBack => None,
                _ => return,
            }
        };

        {
            let _reset = ResetOnDrop(shared);
            if let Some(action) = action {
                action.trigger();
            }
        }

        log::debug!("swipe back at rest");
        let callbacks = shared.callbacks.borrow().clone();
        callbacks.swipe_ended();
    }
}

/// Returns the engine to `Idle` even if the action handler unwinds.
struct ResetOnDrop<'a>(&'a Rc<Shared>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        {
            let mut core = self.0.core.borrow_mut();
            core.state = SwipeState::Idle;
            core.release = None;
        }
        self.0.offset.snap_to(0.0);
    }
}

#[cfg(test)]
#[path = "tests/swipe_tests.rs"]
mod tests;
