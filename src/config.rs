//! Configuration types for the DotGrid UI.

use egui::Color32;

use crate::events::EventController;

// ─────────────────────────────────────────────────────────────────────────────
// Plot geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Fixed geometry of the scatter canvas: the pixel viewport, the margins
/// inside it, and the logical domain the plot area maps onto.
///
/// The default is a 600×400 viewport with margins {top 20, right 20,
/// bottom 50, left 50} (plot area 530×330) over a [0,10]×[0,10] domain.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlotGeometry {
    /// Total canvas size in pixels (width, height).
    pub viewport: [f32; 2],
    /// Margins between the viewport edge and the plot area.
    pub margin: Margins,
    /// Logical x domain (min, max).
    pub x_domain: [f64; 2],
    /// Logical y domain (min, max).
    pub y_domain: [f64; 2],
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            viewport: [600.0, 400.0],
            margin: Margins {
                top: 20.0,
                right: 20.0,
                bottom: 50.0,
                left: 50.0,
            },
            x_domain: [0.0, 10.0],
            y_domain: [0.0, 10.0],
        }
    }
}

impl PlotGeometry {
    /// Width of the plot area (viewport minus horizontal margins).
    #[inline]
    pub fn plot_width(&self) -> f32 {
        self.viewport[0] - self.margin.left - self.margin.right
    }

    /// Height of the plot area (viewport minus vertical margins).
    #[inline]
    pub fn plot_height(&self) -> f32 {
        self.viewport[1] - self.margin.top - self.margin.bottom
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mark appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Visual style of a rendered mark (one circle per dot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkLook {
    /// Circle radius in pixels.
    pub radius: f32,
    /// Fill color.
    pub fill: Color32,
    /// Outline stroke.
    pub stroke: egui::Stroke,
    /// Outline stroke while the mark is being dragged.
    pub active_stroke: egui::Stroke,
    /// Extra pixels beyond `radius` that still count as a hit when grabbing.
    pub grab_slack: f32,
}

impl Default for MarkLook {
    fn default() -> Self {
        Self {
            radius: 5.0,
            fill: Color32::RED,
            stroke: egui::Stroke::new(1.0, Color32::BLACK),
            active_stroke: egui::Stroke::new(2.0, Color32::BLACK),
            grab_slack: 3.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused canvas for embedded use.
#[derive(Debug, Clone, Copy)]
pub struct FeatureFlags {
    /// Draw the x/y axis lines and ticks.
    pub axes: bool,
    /// Draw numeric tick labels next to the axes.
    pub tick_labels: bool,
    /// Draw faint grid lines across the plot area.
    pub grid: bool,
    /// Show the synchronized data table.
    pub table: bool,
    /// Show the top toolbar (dot count, clear button).
    pub toolbar: bool,
    /// Show the pointer's logical position under the canvas.
    pub pointer_readout: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            axes: true,
            tick_labels: true,
            grid: true,
            table: true,
            toolbar: true,
            pointer_readout: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Top-level config
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration consumed by [`run_dotgrid`](crate::app::run_dotgrid).
pub struct DotGridConfig {
    /// Window title.
    pub title: String,
    /// Canvas geometry (viewport, margins, logical domain).
    pub geometry: PlotGeometry,
    /// Mark appearance.
    pub look: MarkLook,
    /// UI feature toggles.
    pub features: FeatureFlags,
    /// Optional event controller; subscribers receive interaction events.
    pub event_controller: Option<EventController>,
    /// Native window options. `None` picks a size that fits canvas + table.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DotGridConfig {
    fn default() -> Self {
        Self {
            title: "DotGrid".to_string(),
            geometry: PlotGeometry::default(),
            look: MarkLook::default(),
            features: FeatureFlags::default(),
            event_controller: None,
            native_options: None,
        }
    }
}
