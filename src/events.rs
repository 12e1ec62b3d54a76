//! Event system for DotGrid.
//!
//! Callers can subscribe to interaction and data events via
//! [`EventController`].  Each event carries a set of [`EventKind`] flags
//! (bitflags-style), and subscribers specify an [`EventFilter`] to receive
//! only the events they care about.  The filter is a simple OR mask: an
//! event is delivered when `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::DotId;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    /// A dot was created (double-click or sink command).
    pub const DOT_ADDED: Self = Self(1 << 0);
    /// A drag session started on an existing mark.
    pub const DRAG_STARTED: Self = Self(1 << 1);
    /// The in-flight drag session moved.
    pub const DRAG_MOVED: Self = Self(1 << 2);
    /// A drag session ended and its working copy was committed.
    pub const DRAG_COMMITTED: Self = Self(1 << 3);
    /// A drag session was cancelled; the mark snapped back.
    pub const DRAG_CANCELLED: Self = Self(1 << 4);
    /// Every dot was removed.
    pub const DATA_CLEARED: Self = Self(1 << 5);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u64::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        // Known kinds with their string names in declaration order.
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::DOT_ADDED, "DOT_ADDED"),
            (EventKind::DRAG_STARTED, "DRAG_STARTED"),
            (EventKind::DRAG_MOVED, "DRAG_MOVED"),
            (EventKind::DRAG_COMMITTED, "DRAG_COMMITTED"),
            (EventKind::DRAG_CANCELLED, "DRAG_CANCELLED"),
            (EventKind::DATA_CLEARED, "DATA_CLEARED"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }

        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }

        if names.is_empty() {
            write!(f, "0x{:x}", self.0)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata attached to dot events: which dot, and where.
#[derive(Debug, Clone, Copy)]
pub struct DotMeta {
    /// Id of the dot the event concerns.
    pub id: DotId,
    /// Logical position after the event.
    pub logical: [f64; 2],
    /// Pixel position within the viewport, when the event came from the
    /// pointer (sink-fed dots have no pointer position).
    pub pixel: Option<[f32; 2]>,
}

/// An event emitted by the DotGrid UI.
#[derive(Debug, Clone)]
pub struct PlotEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since controller creation).
    pub timestamp: f64,
    /// Dot metadata for dot/drag events; `None` for `DATA_CLEARED`.
    pub dot: Option<DotMeta>,
}

impl PlotEvent {
    /// Create a new event with the given kinds; the timestamp is filled in
    /// by the controller on emit.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            dot: None,
        }
    }

    pub fn with_dot(mut self, meta: DotMeta) -> Self {
        self.dot = Some(meta);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// A filter that selects which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &PlotEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<PlotEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Controller that distributes UI events to subscribers.
///
/// Attach it to [`DotGridConfig`](crate::config::DotGridConfig) before
/// launching the UI, then call [`subscribe`](Self::subscribe) (with an
/// optional filter) to receive events on an `mpsc` channel.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<PlotEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<PlotEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all matching subscribers.
    ///
    /// Called internally by the UI; public so that embedding code can
    /// inject synthetic events. Subscribers whose receiver was dropped are
    /// pruned on delivery.
    pub fn emit(&self, mut event: PlotEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_union_and_intersection() {
        let added = EventKind::DOT_ADDED;
        let started = EventKind::DRAG_STARTED;
        let combined = added | started;
        assert!(combined.contains(added));
        assert!(combined.contains(started));
        assert!(combined.intersects(added));
        assert!(!EventKind::DATA_CLEARED.intersects(added));
    }

    #[test]
    fn event_kind_all_matches_everything() {
        assert!(EventKind::ALL.contains(EventKind::DOT_ADDED));
        assert!(EventKind::ALL.contains(EventKind::DRAG_COMMITTED));
        assert!(EventKind::ALL.contains(EventKind::DATA_CLEARED));
    }

    #[test]
    fn event_kinds_do_not_overlap() {
        let all_kinds = [
            EventKind::DOT_ADDED,
            EventKind::DRAG_STARTED,
            EventKind::DRAG_MOVED,
            EventKind::DRAG_COMMITTED,
            EventKind::DRAG_CANCELLED,
            EventKind::DATA_CLEARED,
        ];
        for (i, a) in all_kinds.iter().enumerate() {
            for (j, b) in all_kinds.iter().enumerate() {
                if i != j {
                    assert!(
                        !a.intersects(*b),
                        "EventKind bits {} and {} overlap: {:b} & {:b}",
                        i,
                        j,
                        a.0,
                        b.0
                    );
                }
            }
        }
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(format!("{}", EventKind::DOT_ADDED), "DOT_ADDED");
        let combo = EventKind::DRAG_STARTED | EventKind::DRAG_MOVED;
        assert_eq!(format!("{}", combo), "DRAG_STARTED|DRAG_MOVED");
        assert_eq!(format!("{}", EventKind::ALL), "ALL");
        let unknown = EventKind(1 << 63);
        assert!(format!("{}", unknown).starts_with("0x"));
    }

    #[test]
    fn event_filter_matches() {
        let filter = EventFilter::only(EventKind::DOT_ADDED | EventKind::DATA_CLEARED);
        assert!(filter.matches(&PlotEvent::new(EventKind::DOT_ADDED)));
        assert!(!filter.matches(&PlotEvent::new(EventKind::DRAG_MOVED)));
    }

    #[test]
    fn event_controller_subscribe_and_emit() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_added = ctrl.subscribe(EventFilter::only(EventKind::DOT_ADDED));
        let rx_drag = ctrl.subscribe(EventFilter::only(EventKind::DRAG_STARTED));

        ctrl.emit(PlotEvent::new(EventKind::DOT_ADDED));

        assert!(rx_all.try_recv().is_ok());
        assert!(rx_added.try_recv().is_ok());
        assert!(rx_drag.try_recv().is_err());
    }

    #[test]
    fn event_controller_timestamp_set_on_emit() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();

        std::thread::sleep(std::time::Duration::from_millis(10));
        ctrl.emit(PlotEvent::new(EventKind::DOT_ADDED));

        let evt = rx.try_recv().unwrap();
        assert!(evt.timestamp > 0.0);
    }

    #[test]
    fn dropped_receiver_is_cleaned_up() {
        let ctrl = EventController::new();
        let rx1 = ctrl.subscribe_all();
        let rx2 = ctrl.subscribe_all();

        drop(rx1);

        ctrl.emit(PlotEvent::new(EventKind::DOT_ADDED));
        assert!(rx2.try_recv().is_ok());

        // Emit again – the dead subscriber should have been pruned.
        ctrl.emit(PlotEvent::new(EventKind::DATA_CLEARED));
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn plot_event_carries_dot_metadata() {
        let evt = PlotEvent::new(EventKind::DRAG_COMMITTED).with_dot(DotMeta {
            id: 2,
            logical: [4.5, 6.25],
            pixel: Some([288.5, 123.75]),
        });
        assert!(evt.kinds.contains(EventKind::DRAG_COMMITTED));
        let meta = evt.dot.unwrap();
        assert_eq!(meta.id, 2);
        assert_eq!(meta.logical, [4.5, 6.25]);
    }
}
