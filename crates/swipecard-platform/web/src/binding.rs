use std::cell::RefCell;
use std::rc::Rc;

use swipecard_core::FrameClock;
use swipecard_foundation::{
    select_adapter, SwipeActions, SwipeConfig, SwipeDirection, SwipeEngine, SwipeInputPipeline,
    SwipeVisuals,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use crate::capabilities::detect_capabilities;
use crate::events::{mouse_input, touch_input};
use crate::feedback::VibrationFeedback;
use crate::frame::AnimationFrameDriver;

type Pipeline = Rc<RefCell<SwipeInputPipeline>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {err:?}", self.kind);
        }
    }
}

/// DOM listeners feeding one element's input into a swipe engine.
///
/// Touch devices listen on the element with non-passive handlers so
/// horizontal drags can cancel page scrolling. Mouse devices listen for the
/// press on the element and for moves and releases on the window, so a
/// release outside the card still ends the gesture. Window blur cancels.
/// Dropping the binding removes every listener and cancels an open gesture.
pub struct SwipeBinding {
    pipeline: Pipeline,
    listeners: Vec<Listener>,
}

impl SwipeBinding {
    pub fn attach(element: &HtmlElement, engine: SwipeEngine) -> Result<Self, JsValue> {
        Self::attach_with_repaint(element, engine, Rc::new(|| {}))
    }

    /// Like [`SwipeBinding::attach`], calling `repaint` after every routed event.
    pub fn attach_with_repaint(
        element: &HtmlElement,
        engine: SwipeEngine,
        repaint: Rc<dyn Fn()>,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let capabilities = detect_capabilities(&window);
        let pipeline: Pipeline = Rc::new(RefCell::new(SwipeInputPipeline::new(
            select_adapter(capabilities),
            engine,
        )));

        let element_target: &EventTarget = element.as_ref();
        let window_target: &EventTarget = window.as_ref();
        let mut listeners = Vec::new();

        if capabilities.touch {
            for kind in ["touchstart", "touchmove", "touchend", "touchcancel"] {
                listeners.push(Listener::add(
                    element_target,
                    kind,
                    false,
                    route(&pipeline, &repaint, |event| {
                        event.dyn_ref::<TouchEvent>().and_then(touch_input)
                    }),
                )?);
            }
        } else {
            let mouse = |event: &Event| event.dyn_ref::<MouseEvent>().and_then(mouse_input);
            listeners.push(Listener::add(
                element_target,
                "mousedown",
                false,
                route(&pipeline, &repaint, mouse),
            )?);
            for kind in ["mousemove", "mouseup"] {
                listeners.push(Listener::add(
                    window_target,
                    kind,
                    false,
                    route(&pipeline, &repaint, mouse),
                )?);
            }
        }

        {
            let pipeline = pipeline.clone();
            let repaint = repaint.clone();
            listeners.push(Listener::add(window_target, "blur", true, move |_| {
                pipeline.borrow_mut().abort();
                repaint();
            })?);
        }

        log::debug!("swipe binding attached with {} listeners", listeners.len());
        Ok(Self {
            pipeline,
            listeners,
        })
    }

    pub fn engine(&self) -> SwipeEngine {
        self.pipeline.borrow().engine().clone()
    }
}

impl Drop for SwipeBinding {
    fn drop(&mut self) {
        self.listeners.clear();
        match self.pipeline.try_borrow_mut() {
            Ok(mut pipeline) => pipeline.abort(),
            Err(_) => log::warn!("swipe binding dropped while dispatching"),
        }
    }
}

fn route(
    pipeline: &Pipeline,
    repaint: &Rc<dyn Fn()>,
    convert: impl Fn(&Event) -> Option<swipecard_foundation::RawInput> + 'static,
) -> impl FnMut(Event) + 'static {
    let pipeline = pipeline.clone();
    let repaint = repaint.clone();
    move |event: Event| {
        let Some(raw) = convert(&event) else {
            return;
        };
        let suppress = pipeline.borrow_mut().dispatch(&raw);
        if suppress {
            event.prevent_default();
        }
        repaint();
    }
}

/// A swipeable card mounted on a DOM element.
///
/// Owns the frame clock, its `requestAnimationFrame` driver and the input
/// binding, and mirrors [`SwipeVisuals`] into the element: `transform` for
/// the offset, `--swipe-reveal-progress` and `--swipe-icon-scale` custom
/// properties, and `data-swipe-revealed` / `data-swipe-label` attributes for
/// styling the uncovered affordance.
pub struct SwipeCard {
    engine: SwipeEngine,
    driver: Rc<AnimationFrameDriver>,
    _binding: SwipeBinding,
    _clock: FrameClock,
}

impl SwipeCard {
    pub fn mount(
        element: HtmlElement,
        config: SwipeConfig,
        actions: SwipeActions,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let clock = FrameClock::new();
        let driver = AnimationFrameDriver::install(&clock)?;
        let engine = SwipeEngine::new(
            config,
            actions,
            Rc::new(VibrationFeedback::detect()),
            clock.clone(),
        )
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

        if let Some(width) = window.inner_width()?.as_f64() {
            engine.set_viewport_width(width as f32);
        }

        let repaint: Rc<dyn Fn()> = {
            let element = element.clone();
            let engine = engine.clone();
            Rc::new(move || paint(&element, &engine.visuals()))
        };
        driver.set_after_frame(repaint.clone());
        let binding = SwipeBinding::attach_with_repaint(&element, engine.clone(), repaint.clone())?;
        repaint();

        Ok(Self {
            engine,
            driver,
            _binding: binding,
            _clock: clock,
        })
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }
}

impl Drop for SwipeCard {
    fn drop(&mut self) {
        // The repaint hook holds the engine, which holds the clock and driver.
        self.driver.clear_after_frame();
    }
}

fn paint(element: &HtmlElement, visuals: &SwipeVisuals) {
    let style = element.style();
    let results = [
        style.set_property("transform", &transform_value(visuals.translate_x)),
        style.set_property(
            "--swipe-reveal-progress",
            &format!("{:.3}", visuals.reveal_progress),
        ),
        style.set_property("--swipe-icon-scale", &format!("{:.2}", visuals.icon_scale)),
        match revealed_attribute(visuals.revealed) {
            Some(side) => element.set_attribute("data-swipe-revealed", side),
            None => element.remove_attribute("data-swipe-revealed"),
        },
        match &visuals.label {
            Some(label) => element.set_attribute("data-swipe-label", label),
            None => element.remove_attribute("data-swipe-label"),
        },
    ];
    for result in results {
        if let Err(err) = result {
            log::warn!("failed to paint swipe card: {err:?}");
        }
    }
}

pub(crate) fn transform_value(translate_x: f32) -> String {
    format!("translateX({translate_x:.2}px)")
}

pub(crate) fn revealed_attribute(revealed: Option<SwipeDirection>) -> Option<&'static str> {
    revealed.map(|direction| match direction {
        SwipeDirection::Left => "left",
        SwipeDirection::Right => "right",
    })
}

#[cfg(test)]
#[path = "tests/binding_tests.rs"]
mod tests;
