//! Data layer: the dot store and the shared per-frame context handed to
//! panels.

pub mod points;

pub use points::{Dot, DotId, DotStore};

use crate::config::{FeatureFlags, MarkLook};
use crate::events::EventController;
use crate::interaction::DotInteraction;
use crate::mapper::PlotMapper;

/// Mutable view over the app state that panels render from.
///
/// Borrowed fresh each frame so that panels stay decoupled from the app
/// struct itself.
pub struct DotGridData<'a> {
    pub store: &'a mut DotStore,
    pub interaction: &'a mut DotInteraction,
    pub mapper: &'a PlotMapper,
    pub look: &'a MarkLook,
    pub features: &'a FeatureFlags,
    pub events: Option<&'a EventController>,
}
