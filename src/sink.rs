//! Command channel for feeding dots into the UI from embedding code.
//!
//! Create a channel with [`channel()`], hand the receiver to
//! [`run_dotgrid`](crate::app::run_dotgrid), and keep the cloneable
//! [`DotSink`] to push commands from any thread. Commands are ingested
//! once per frame before rendering.

use std::sync::mpsc::{Receiver, Sender};

/// Messages sent over the channel to drive the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DotCommand {
    /// Append a dot at the given logical position. The UI assigns the id
    /// on ingest (`count + 1`, same rule as a double-click).
    Add { x: f64, y: f64 },
    /// Remove every dot and reset id assignment.
    ClearAll,
}

/// Convenience sender for feeding dots into the UI.
#[derive(Clone)]
pub struct DotSink {
    tx: Sender<DotCommand>,
}

impl DotSink {
    /// Append a dot at the given logical position.
    pub fn add_dot(&self, x: f64, y: f64) -> Result<(), std::sync::mpsc::SendError<DotCommand>> {
        self.tx.send(DotCommand::Add { x, y })
    }

    /// Remove every dot.
    pub fn clear_all(&self) -> Result<(), std::sync::mpsc::SendError<DotCommand>> {
        self.tx.send(DotCommand::ClearAll)
    }
}

/// Create a sink/receiver pair for driving the UI.
pub fn channel() -> (DotSink, Receiver<DotCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (DotSink { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_delivers_commands_in_order() {
        let (sink, rx) = channel();
        sink.add_dot(1.0, 2.0).unwrap();
        sink.clear_all().unwrap();

        assert_eq!(rx.try_recv().unwrap(), DotCommand::Add { x: 1.0, y: 2.0 });
        assert_eq!(rx.try_recv().unwrap(), DotCommand::ClearAll);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn sink_is_cloneable_across_threads() {
        let (sink, rx) = channel();
        let sink2 = sink.clone();
        let handle = std::thread::spawn(move || {
            sink2.add_dot(3.0, 4.0).unwrap();
        });
        handle.join().unwrap();
        assert_eq!(rx.try_recv().unwrap(), DotCommand::Add { x: 3.0, y: 4.0 });
    }
}
