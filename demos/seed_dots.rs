//! Example: Seeding dots from embedding code
//!
//! What it demonstrates
//! - Feeding dots into the UI using `channel()` and `DotSink`.
//! - Dots added through the sink get ids assigned exactly like
//!   double-clicked dots, and show up in the table immediately.
//!
//! How to run
//! ```bash
//! cargo run --example seed_dots
//! ```
//! The canvas opens pre-populated with a diagonal of dots; double-click
//! to add more, drag any mark to move it.

use dotgrid::{channel, run_dotgrid, DotGridConfig};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    let (sink, rx) = channel();

    // Producer: seed a diagonal, one dot per 200 ms.
    std::thread::spawn(move || {
        for i in 0..=10 {
            let v = i as f64;
            // Ignore error if the UI closed (receiver dropped)
            let _ = sink.add_dot(v, v);
            std::thread::sleep(Duration::from_millis(200));
        }
    });

    // Run the UI until closed
    run_dotgrid(rx, DotGridConfig::default())
}
