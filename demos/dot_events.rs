//! Example: Subscribing to interaction events
//!
//! What it demonstrates
//! - Attaching an `EventController` to the config and receiving
//!   `PlotEvent`s (dot added, drag started/committed, data cleared) on a
//!   background thread.
//!
//! How to run
//! ```bash
//! cargo run --example dot_events
//! ```
//! Interact with the canvas and watch the events print to stderr.

use dotgrid::{channel, run_dotgrid, DotGridConfig, EventController, EventFilter, EventKind};

fn main() -> eframe::Result<()> {
    let (_sink, rx) = channel();

    let events = EventController::new();
    // Everything except the per-frame drag moves, which would flood the log.
    let filter = EventFilter::only(
        EventKind::DOT_ADDED
            | EventKind::DRAG_STARTED
            | EventKind::DRAG_COMMITTED
            | EventKind::DRAG_CANCELLED
            | EventKind::DATA_CLEARED,
    );
    let subscription = events.subscribe(filter);
    std::thread::spawn(move || {
        while let Ok(evt) = subscription.recv() {
            match evt.dot {
                Some(meta) => eprintln!(
                    "[{:8.3}s] {} dot {} at ({:.3}, {:.3})",
                    evt.timestamp, evt.kinds, meta.id, meta.logical[0], meta.logical[1]
                ),
                None => eprintln!("[{:8.3}s] {}", evt.timestamp, evt.kinds),
            }
        }
    });

    let cfg = DotGridConfig {
        event_controller: Some(events),
        ..DotGridConfig::default()
    };
    run_dotgrid(rx, cfg)
}
