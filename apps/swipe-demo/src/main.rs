use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use swipe_demo::script::{demo_gestures, render_bar, DemoCard};
use swipecard_core::{Clock, FrameClock, FrameScheduler, SystemClock};

const FRAME: Duration = Duration::from_millis(16);

/// Counts frame requests; the loop below delivers them in real time.
struct FrameRequests(Cell<u32>);

impl FrameScheduler for FrameRequests {
    fn schedule_frame(&self) {
        self.0.set(self.0.get() + 1);
    }
}

fn main() {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipeable card ===");
    println!("Right archives, left deletes. Threshold 100px, viewport 360px.");
    println!("Set RUST_LOG=debug to trace every pointer event.");
    println!();

    let requests = Rc::new(FrameRequests(Cell::new(0)));
    let clock = FrameClock::with_scheduler(requests.clone());
    let card = match DemoCard::new(clock.clone()) {
        Ok(card) => card,
        Err(err) => {
            log::error!("invalid swipe configuration: {err}");
            std::process::exit(1);
        }
    };

    let system = SystemClock;
    let start = system.now();
    for gesture in demo_gestures() {
        println!("== {} ==", gesture.name);
        card.perform(&gesture);
        println!("   released   {}", render_bar(&card.engine().visuals()));

        while card.clock().has_frame_callbacks() {
            thread::sleep(FRAME);
            let now = system.elapsed_nanos(start);
            card.clock().drain_frame_callbacks(now);
            println!(
                "   {:>7.1}ms  {}",
                now as f64 / 1_000_000.0,
                render_bar(&card.engine().visuals())
            );
        }

        for event in card.take_events() {
            println!("   -> {event}");
        }
        println!();
    }

    log::info!(
        "done after {}ms, {} frame requests",
        system.elapsed_millis(start),
        requests.0.get()
    );
}
