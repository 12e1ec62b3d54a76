//! DotGrid crate root: re-exports and module wiring.
//!
//! DotGrid is an interactive scatter editor built on egui/eframe: the
//! user double-clicks a fixed-geometry canvas to add points and drags
//! existing marks to reposition them, mirrored by a synchronized data
//! table.
//!
//! The implementation is split into cohesive modules:
//! - `mapper`: pixel ↔ logical coordinate mapping
//! - `data`: the dot store and the shared per-frame panel context
//! - `interaction`: the drag state machine and create/move operations
//! - `sink`: command channel to feed dots from embedding code
//! - `events`: subscriber event system for interaction/data events
//! - `config`: geometry, mark appearance, and feature flags
//! - `panels`: the canvas and table panels
//! - `app`: the eframe shell and run entry point

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod interaction;
pub mod mapper;
pub mod panels;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_dotgrid, DotGridApp};
pub use config::{DotGridConfig, FeatureFlags, MarkLook, PlotGeometry};
pub use data::{Dot, DotId, DotStore};
pub use events::{DotMeta, EventController, EventFilter, EventKind, PlotEvent};
pub use interaction::{DotInteraction, DragSession, DragState};
pub use mapper::PlotMapper;
pub use sink::{channel, DotCommand, DotSink};
