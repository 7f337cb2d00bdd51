use crate::platform::FrameScheduler;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll, Waker};

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Box<dyn FnOnce(u64) + 'static>,
}

struct FrameClockInner {
    callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_callback_id: Cell<FrameCallbackId>,
    scheduler: RefCell<Option<Rc<dyn FrameScheduler>>>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl FrameClockInner {
    fn register(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_callback_id.get();
        self.next_callback_id.set(id + 1);
        let was_empty = {
            let mut callbacks = self.callbacks.borrow_mut();
            let was_empty = callbacks.is_empty();
            callbacks.push_back(FrameCallbackEntry { id, callback });
            was_empty
        };
        if was_empty {
            self.request_frame();
        }
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut callbacks = self.callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn request_frame(&self) {
        // Cloned out so a scheduler may register callbacks of its own.
        let scheduler = self.scheduler.borrow().clone();
        if let Some(scheduler) = scheduler {
            scheduler.schedule_frame();
        }
    }
}

/// Single-threaded queue of one-shot frame callbacks.
///
/// Animations register a callback per frame they want to observe; the host
/// calls [`FrameClock::drain_frame_callbacks`] with the frame timestamp.
/// Callbacks registered while a drain is running are deferred to the next
/// frame, so an animation that reschedules itself advances exactly one step
/// per frame.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<FrameClockInner>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FrameClockInner {
                callbacks: RefCell::new(VecDeque::new()),
                next_callback_id: Cell::new(1),
                scheduler: RefCell::new(None),
                last_frame_nanos: Cell::new(None),
            }),
        }
    }

    pub fn with_scheduler(scheduler: Rc<dyn FrameScheduler>) -> Self {
        let clock = Self::new();
        clock.set_scheduler(scheduler);
        clock
    }

    /// Installs the host scheduler. If callbacks are already waiting, a frame
    /// is requested immediately.
    pub fn set_scheduler(&self, scheduler: Rc<dyn FrameScheduler>) {
        *self.inner.scheduler.borrow_mut() = Some(scheduler);
        if self.has_frame_callbacks() {
            self.inner.request_frame();
        }
    }

    pub fn downgrade(&self) -> WeakFrameClock {
        WeakFrameClock {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.inner.register(Box::new(callback));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }

    pub fn next_frame(&self) -> NextFrame {
        NextFrame::new(self.clone())
    }

    /// Runs every callback registered before this call with `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.last_frame_nanos.set(Some(frame_time_nanos));
        let pending: Vec<FrameCallbackEntry> = self.inner.callbacks.borrow_mut().drain(..).collect();
        if !pending.is_empty() {
            log::trace!(
                "draining {} frame callback(s) at {frame_time_nanos}ns",
                pending.len()
            );
        }
        for entry in pending {
            (entry.callback)(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.callbacks.borrow().is_empty()
    }

    /// Timestamp of the most recent drain, if any frame has been delivered.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner.last_frame_nanos.get()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning handle used by schedulers that are themselves owned by the clock.
#[derive(Clone)]
pub struct WeakFrameClock {
    inner: Weak<FrameClockInner>,
}

impl WeakFrameClock {
    pub fn upgrade(&self) -> Option<FrameClock> {
        self.inner.upgrade().map(|inner| FrameClock { inner })
    }
}

/// Keeps a frame callback alive; dropping or cancelling it unregisters the
/// callback if it has not run yet.
pub struct FrameCallbackRegistration {
    clock: Weak<FrameClockInner>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.unregister();
    }

    fn unregister(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(clock) = self.clock.upgrade() {
                clock.cancel(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.unregister();
    }
}

struct NextFrameState {
    registration: Option<FrameCallbackRegistration>,
    time: Option<u64>,
    waker: Option<Waker>,
}

/// Future resolving to the timestamp of the next drained frame.
pub struct NextFrame {
    clock: FrameClock,
    state: Rc<RefCell<NextFrameState>>,
}

impl NextFrame {
    fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            state: Rc::new(RefCell::new(NextFrameState {
                registration: None,
                time: None,
                waker: None,
            })),
        }
    }
}

impl Future for NextFrame {
    type Output = u64;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let needs_registration = {
            let mut state = self.state.borrow_mut();
            if let Some(time) = state.time {
                return Poll::Ready(time);
            }
            state.waker = Some(cx.waker().clone());
            state.registration.is_none()
        };

        if needs_registration {
            let weak = Rc::downgrade(&self.state);
            let registration = self.clock.with_frame_nanos(move |time| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let waker = {
                    let mut state = state.borrow_mut();
                    state.time = Some(time);
                    state.registration = None;
                    state.waker.take()
                };
                if let Some(waker) = waker {
                    waker.wake();
                }
            });
            self.state.borrow_mut().registration = Some(registration);
        }

        Poll::Pending
    }
}
