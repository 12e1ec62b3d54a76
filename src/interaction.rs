//! Pointer interaction state for the scatter canvas.
//!
//! This module owns the drag state machine:
//! `Idle --begin_drag--> Dragging --update_drag (self-loop)--> Dragging
//! --end_drag/cancel_drag--> Idle`.
//!
//! While a drag is in flight the session's working copy acts as a visual
//! override: the renderer and the table consult it in preference to the
//! committed store, so the mark tracks the pointer every frame without the
//! store being touched. The store is only written on `end_drag`, which
//! takes the final pointer position directly so the commit can never read
//! a stale working copy.

use crate::data::{Dot, DotId, DotStore};
use crate::mapper::PlotMapper;

// Feature-gated debug logging for drag interactions.
// Enable prints with: cargo run --features interaction_debug
// When the feature is disabled, logs are compiled out.
#[cfg(feature = "interaction_debug")]
#[allow(unused_macros)]
macro_rules! interaction_debug { ($($arg:tt)*) => { eprintln!($($arg)*); } }

#[cfg(not(feature = "interaction_debug"))]
#[allow(unused_macros)]
macro_rules! interaction_debug {
    ($($arg:tt)*) => {{ /* no-op */ }};
}

/// Transient state for the single in-flight drag. At most one session is
/// live at a time (single-pointer input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The dot as it was committed when the drag started.
    pub origin: Dot,
    /// Working copy, continuously updated with the pointer position.
    pub current: Dot,
}

/// The two states of the drag machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Controller for create/drag operations on the dot store.
#[derive(Debug, Clone, Default)]
pub struct DotInteraction {
    session: Option<DragSession>,
}

impl DotInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Id of the dot currently being dragged, if any.
    #[inline]
    pub fn dragged_id(&self) -> Option<DotId> {
        self.session.map(|s| s.current.id)
    }

    /// Visual override for the given dot: while it is being dragged, the
    /// renderer should draw the session's working copy instead of the
    /// committed entry.
    pub fn visual_override(&self, id: DotId) -> Option<Dot> {
        self.session.filter(|s| s.current.id == id).map(|s| s.current)
    }

    /// Create a new dot at the given pixel position (double-click on the
    /// canvas background). Always succeeds; duplicate logical positions
    /// are permitted.
    pub fn create_dot(
        &mut self,
        store: &mut DotStore,
        mapper: &PlotMapper,
        px: f32,
        py: f32,
    ) -> Dot {
        let (x, y) = mapper.to_logical(px, py);
        let dot = store.add_at(x, y);
        interaction_debug!("[interaction] create dot {} at ({x:.3}, {y:.3})", dot.id);
        dot
    }

    /// Start dragging `dot`. Returns `false` (and leaves the existing
    /// session untouched) if a drag is already in flight; a second
    /// pointer-down cannot preempt the active session.
    pub fn begin_drag(&mut self, dot: Dot) -> bool {
        if self.session.is_some() {
            return false;
        }
        interaction_debug!("[interaction] begin drag of dot {}", dot.id);
        self.session = Some(DragSession {
            origin: dot,
            current: dot,
        });
        true
    }

    /// Move the in-flight drag to a new pixel position, overwriting the
    /// working copy. No-op when no session is active. Returns the updated
    /// working copy.
    pub fn update_drag(&mut self, mapper: &PlotMapper, px: f32, py: f32) -> Option<Dot> {
        let session = self.session.as_mut()?;
        let (x, y) = mapper.to_logical(px, py);
        session.current.x = x;
        session.current.y = y;
        Some(session.current)
    }

    /// End the drag at the given pixel position and commit the working
    /// copy into the store. The final position is applied to the session
    /// before the commit reads it, so the committed value always matches
    /// the pointer's last position. Returns the committed dot, or `None`
    /// when no session was active.
    pub fn end_drag(
        &mut self,
        store: &mut DotStore,
        mapper: &PlotMapper,
        px: f32,
        py: f32,
    ) -> Option<Dot> {
        self.update_drag(mapper, px, py);
        let session = self.session.take()?;
        interaction_debug!(
            "[interaction] commit dot {} at ({:.3}, {:.3})",
            session.current.id,
            session.current.x,
            session.current.y
        );
        store.commit(session.current);
        Some(session.current)
    }

    /// Abort the in-flight drag without committing; the mark snaps back to
    /// its committed position. Returns the abandoned working copy.
    pub fn cancel_drag(&mut self) -> Option<Dot> {
        let session = self.session.take()?;
        interaction_debug!("[interaction] cancel drag of dot {}", session.current.id);
        Some(session.current)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
