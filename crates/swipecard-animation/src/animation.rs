//! Time-based animations with easing curves.
//!
//! An [`Animatable`] holds a value and moves it toward a target one frame at
//! a time, using the [`FrameClock`] it was created with. Every call to
//! [`Animatable::animate_to`] starts a new run and returns an
//! [`AnimationHandle`] that resolves when that run ends, either by reaching
//! its target or by being superseded.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use swipecard_core::{FrameCallbackRegistration, FrameClock};

const NANOS_PER_MILLI: u64 = 1_000_000;
const SOLVER_EPSILON: f32 = 1e-6;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing curves available to release animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Decelerates into the target.
    EaseOut,
    /// Material standard curve.
    FastOutSlowIn,
    /// Accelerates away; suited to content leaving the screen.
    FastOutLinearIn,
}

impl Easing {
    /// Map a linear fraction in `[0, 1]` onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        let curve = match self {
            Easing::Linear => return fraction.clamp(0.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0),
            Easing::FastOutLinearIn => CubicBezier::new(0.4, 0.0, 1.0, 1.0),
        };
        curve.solve(fraction)
    }
}

/// Cubic polynomial `((a t + b) t + c) t` for one axis of a bezier anchored
/// at (0, 0) and (1, 1).
#[derive(Clone, Copy)]
struct Cubic {
    a: f32,
    b: f32,
    c: f32,
}

impl Cubic {
    fn through(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn sample(self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

struct CubicBezier {
    x: Cubic,
    y: Cubic,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Cubic::through(x1, x2),
            y: Cubic::through(y1, y2),
        }
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        self.y.sample(self.parameter_for(fraction))
    }

    /// Finds `t` with `x(t) == fraction`. Newton steps converge quickly on
    /// these curves; bisection takes over when the slope flattens out.
    fn parameter_for(&self, fraction: f32) -> f32 {
        let mut t = fraction;
        for _ in 0..8 {
            let error = self.x.sample(t) - fraction;
            if error.abs() < SOLVER_EPSILON {
                return t;
            }
            let slope = self.x.slope(t);
            if slope.abs() < SOLVER_EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..20 {
            let value = self.x.sample(t);
            if (value - fraction).abs() < SOLVER_EPSILON {
                break;
            }
            if value > fraction {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

/// Tween description: fixed duration, easing, optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    pub fn duration_nanos(&self) -> u64 {
        self.duration_millis.saturating_mul(NANOS_PER_MILLI)
    }

    fn delay_nanos(&self) -> u64 {
        self.delay_millis.saturating_mul(NANOS_PER_MILLI)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(200, Easing::EaseOut)
    }
}

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The value reached the run's target.
    Finished,
    /// A later `animate_to`, `snap_to` or `stop` replaced the run.
    Interrupted,
}

struct Completion {
    result: Option<AnimationEnd>,
    listeners: Vec<Box<dyn FnOnce(AnimationEnd)>>,
    wakers: Vec<Waker>,
}

/// Completion of one animation run.
///
/// Await it, or attach a listener with [`AnimationHandle::on_end`]. Listeners
/// run synchronously inside the frame that ends the run, before any awaiting
/// task is woken.
#[derive(Clone)]
pub struct AnimationHandle {
    completion: Rc<RefCell<Completion>>,
}

impl AnimationHandle {
    fn pending() -> Self {
        Self {
            completion: Rc::new(RefCell::new(Completion {
                result: None,
                listeners: Vec::new(),
                wakers: Vec::new(),
            })),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completion.borrow().result.is_some()
    }

    pub fn result(&self) -> Option<AnimationEnd> {
        self.completion.borrow().result
    }

    /// Runs `listener` when the run ends, or immediately if it already has.
    pub fn on_end(&self, listener: impl FnOnce(AnimationEnd) + 'static) {
        let resolved = self.completion.borrow().result;
        match resolved {
            Some(end) => listener(end),
            None => self
                .completion
                .borrow_mut()
                .listeners
                .push(Box::new(listener)),
        }
    }

    fn resolve(&self, end: AnimationEnd) {
        let (listeners, wakers) = {
            let mut completion = self.completion.borrow_mut();
            if completion.result.is_some() {
                return;
            }
            completion.result = Some(end);
            (
                std::mem::take(&mut completion.listeners),
                std::mem::take(&mut completion.wakers),
            )
        };
        for listener in listeners {
            listener(end);
        }
        for waker in wakers {
            waker.wake();
        }
    }
}

impl Future for AnimationHandle {
    type Output = AnimationEnd;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut completion = self.completion.borrow_mut();
        if let Some(end) = completion.result {
            return Poll::Ready(end);
        }
        if !completion.wakers.iter().any(|w| w.will_wake(cx.waker())) {
            completion.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}

/// Value that can be moved toward a target over successive frames.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    run: Option<AnimationHandle>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
            run: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().run.is_some()
    }

    /// Starts a run from the current value toward `target`. A run already in
    /// flight ends with [`AnimationEnd::Interrupted`].
    pub fn animate_to(&self, target: T, spec: AnimationSpec) -> AnimationHandle {
        let handle = AnimationHandle::pending();
        let interrupted = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            inner.registration = None;
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.run.replace(handle.clone())
        };
        if let Some(previous) = interrupted {
            log::trace!("animation run superseded by a new target");
            previous.resolve(AnimationEnd::Interrupted);
        }
        Self::schedule_frame(&self.inner);
        handle
    }

    /// Jumps to `value` without animating, interrupting any run in flight.
    pub fn snap_to(&self, value: T) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            inner.registration = None;
            inner.current = value.clone();
            inner.start = value.clone();
            inner.target = value;
            inner.start_time_nanos = None;
            inner.run.take()
        };
        if let Some(run) = interrupted {
            run.resolve(AnimationEnd::Interrupted);
        }
    }

    /// Freezes the value where it is, interrupting any run in flight.
    pub fn stop(&self) {
        let current = self.value();
        self.snap_to(current);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || inner.run.is_none() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (finished, schedule_next) = {
            let mut guard = this.borrow_mut();
            let inner = &mut *guard;
            inner.registration = None;
            if inner.run.is_none() {
                return;
            }

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start_time);
            let delay = spec.delay_nanos();

            if elapsed < delay {
                (None, true)
            } else {
                let duration = spec.duration_nanos();
                let linear = if duration == 0 {
                    1.0
                } else {
                    ((elapsed - delay) as f64 / duration as f64).clamp(0.0, 1.0) as f32
                };

                if linear >= 1.0 {
                    inner.current = inner.target.clone();
                    inner.start = inner.target.clone();
                    inner.start_time_nanos = None;
                    (inner.run.take(), false)
                } else {
                    let progress = spec.easing.transform(linear);
                    inner.current = inner.start.lerp(&inner.target, progress);
                    (None, true)
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
        if let Some(run) = finished {
            run.resolve(AnimationEnd::Finished);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
