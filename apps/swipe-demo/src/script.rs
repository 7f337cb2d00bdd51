//! Scripted gestures replayed against a real engine.

use std::cell::RefCell;
use std::rc::Rc;

use swipecard_core::FrameClock;
use swipecard_foundation::{
    ConfigError, FeedbackSink, HapticIntensity, InputSource, Point, PointerEvent, PointerPhase,
    SwipeAction, SwipeActions, SwipeCallbacks, SwipeConfig, SwipeEngine, SwipeVisuals,
};

const ORIGIN: Point = Point::new(400.0, 300.0);
const BAR_WIDTH: usize = 41;

#[derive(Clone, Debug)]
pub struct Gesture {
    pub name: &'static str,
    /// Pointer offsets from the press position, one move each.
    pub path: Vec<Point>,
    /// End with `Cancel` instead of `End`.
    pub cancelled: bool,
}

impl Gesture {
    fn horizontal(name: &'static str, stops: &[f32]) -> Self {
        Self {
            name,
            path: stops.iter().map(|dx| Point::new(*dx, 0.0)).collect(),
            cancelled: false,
        }
    }
}

pub fn demo_gestures() -> Vec<Gesture> {
    vec![
        Gesture::horizontal("short drag snaps back", &[20.0, 45.0, 70.0]),
        Gesture::horizontal("swipe right to archive", &[30.0, 80.0, 120.0, 150.0]),
        Gesture::horizontal("swipe left to delete", &[-40.0, -90.0, -140.0, -260.0]),
        Gesture::horizontal("cross then change of mind", &[60.0, 120.0, 90.0, 40.0]),
        Gesture {
            name: "vertical scroll is left alone",
            path: vec![Point::new(2.0, 25.0), Point::new(40.0, 90.0), Point::new(160.0, 140.0)],
            cancelled: false,
        },
        Gesture {
            name: "cancelled by the system",
            path: vec![Point::new(50.0, 0.0), Point::new(130.0, 4.0)],
            cancelled: true,
        },
    ]
}

/// Engine plus everything the demo prints about it.
pub struct DemoCard {
    engine: SwipeEngine,
    clock: FrameClock,
    events: Rc<RefCell<Vec<String>>>,
}

struct LoggedFeedback(Rc<RefCell<Vec<String>>>);

impl FeedbackSink for LoggedFeedback {
    fn pulse(&self, intensity: HapticIntensity) {
        self.0.borrow_mut().push(format!("haptic {intensity:?}"));
    }
}

impl DemoCard {
    pub fn new(clock: FrameClock) -> Result<Self, ConfigError> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let archive = events.clone();
        let delete = events.clone();
        let actions = SwipeActions::new()
            .with_right(
                SwipeAction::new(move || archive.borrow_mut().push("archived".into()))
                    .with_label("Archive"),
            )
            .with_left(
                SwipeAction::new(move || delete.borrow_mut().push("deleted".into()))
                    .with_label("Delete"),
            );

        let engine = SwipeEngine::new(
            SwipeConfig::default(),
            actions,
            Rc::new(LoggedFeedback(events.clone())),
            clock.clone(),
        )?;
        let started = events.clone();
        let ended = events.clone();
        engine.set_callbacks(
            SwipeCallbacks::new()
                .on_swipe_start(move || started.borrow_mut().push("swipe start".into()))
                .on_swipe_end(move || ended.borrow_mut().push("swipe end".into())),
        );
        engine.set_viewport_width(360.0);

        Ok(Self {
            engine,
            clock,
            events,
        })
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Feeds the gesture's input; the release animation is left to the caller.
    pub fn perform(&self, gesture: &Gesture) {
        self.send(PointerPhase::Start, Point::ZERO);
        for offset in &gesture.path {
            self.send(PointerPhase::Move, *offset);
        }
        let last = gesture.path.last().copied().unwrap_or(Point::ZERO);
        let terminal = if gesture.cancelled {
            PointerPhase::Cancel
        } else {
            PointerPhase::End
        };
        self.send(terminal, last);
    }

    /// Events recorded since the last call.
    pub fn take_events(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn send(&self, phase: PointerPhase, offset: Point) {
        let event = PointerEvent::new(phase, ORIGIN + offset, InputSource::Touch);
        self.engine.handle_input(&event);
        log::debug!(
            "{phase:?} {:+.0},{:+.0} -> {}",
            offset.x,
            offset.y,
            render_bar(&self.engine.visuals())
        );
    }
}

/// One-line picture of the card: `|` marks rest, `#` the card's leading edge.
pub fn render_bar(visuals: &SwipeVisuals) -> String {
    let half = (BAR_WIDTH / 2) as f32;
    let position = (visuals.translate_x / 400.0 * half).clamp(-half, half);
    let column = (half + position).round() as usize;
    let mut bar: Vec<char> = vec!['.'; BAR_WIDTH];
    bar[BAR_WIDTH / 2] = '|';
    bar[column.min(BAR_WIDTH - 1)] = '#';
    let mut line: String = bar.into_iter().collect();
    if let Some(label) = &visuals.label {
        line.push_str(&format!(
            " {label} {:>3.0}%{}",
            visuals.reveal_progress * 100.0,
            if visuals.icon_scale > 1.0 { " !" } else { "" }
        ));
    }
    line
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
