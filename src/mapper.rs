//! Pixel ↔ logical coordinate mapping for the scatter canvas.
//!
//! The canvas has a fixed pixel viewport with margins; the plot area inside
//! the margins maps linearly onto the logical domain. Pixel y grows
//! downward while logical y grows upward, so the vertical scale is
//! inverted. Neither direction clamps: a pointer position outside the plot
//! area maps to a logical coordinate outside the domain, and such dots
//! render outside the axes.

use crate::config::PlotGeometry;

/// Bidirectional linear mapper between canvas pixels and logical
/// coordinates. Pixel positions are relative to the viewport's top-left
/// corner. Pure arithmetic; both directions always succeed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMapper {
    geometry: PlotGeometry,
}

impl PlotMapper {
    pub fn new(geometry: PlotGeometry) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    /// Convert a pixel position (relative to the viewport top-left) to
    /// logical coordinates.
    pub fn to_logical(&self, px: f32, py: f32) -> (f64, f64) {
        let g = &self.geometry;
        let plot_w = g.plot_width() as f64;
        let plot_h = g.plot_height() as f64;
        let x_span = g.x_domain[1] - g.x_domain[0];
        let y_span = g.y_domain[1] - g.y_domain[0];

        let x = g.x_domain[0] + (px as f64 - g.margin.left as f64) * x_span / plot_w;
        // Inverted: pixel 0 (top of plot area) maps to the domain maximum.
        let y = g.y_domain[0] + (plot_h - (py as f64 - g.margin.top as f64)) * y_span / plot_h;
        (x, y)
    }

    /// Convert logical coordinates to a pixel position (relative to the
    /// viewport top-left). Exact inverse of [`to_logical`](Self::to_logical).
    pub fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let g = &self.geometry;
        let plot_w = g.plot_width() as f64;
        let plot_h = g.plot_height() as f64;
        let x_span = g.x_domain[1] - g.x_domain[0];
        let y_span = g.y_domain[1] - g.y_domain[0];

        let px = g.margin.left as f64 + (x - g.x_domain[0]) * plot_w / x_span;
        let py = g.margin.top as f64 + plot_h - (y - g.y_domain[0]) * plot_h / y_span;
        (px as f32, py as f32)
    }

    /// Whether a pixel position lies inside the plot area (margins excluded).
    pub fn in_plot_area(&self, px: f32, py: f32) -> bool {
        let g = &self.geometry;
        px >= g.margin.left
            && px <= g.margin.left + g.plot_width()
            && py >= g.margin.top
            && py <= g.margin.top + g.plot_height()
    }
}

impl Default for PlotMapper {
    fn default() -> Self {
        Self::new(PlotGeometry::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-4;

    #[test]
    fn axis_corners_invert_y() {
        let m = PlotMapper::default();
        let g = *m.geometry();

        // Top-left of the plot area is (domain min x, domain MAX y).
        let (x, y) = m.to_logical(g.margin.left, g.margin.top);
        assert!((x - 0.0).abs() < EPS, "top-left x should be 0, got {x}");
        assert!((y - 10.0).abs() < EPS, "top-left y should be 10, got {y}");

        // Bottom-right of the plot area is (domain max x, domain MIN y).
        let (x, y) = m.to_logical(
            g.margin.left + g.plot_width(),
            g.margin.top + g.plot_height(),
        );
        assert!((x - 10.0).abs() < EPS, "bottom-right x should be 10, got {x}");
        assert!((y - 0.0).abs() < EPS, "bottom-right y should be 0, got {y}");
    }

    #[test]
    fn round_trip_pixel_to_logical_and_back() {
        let m = PlotMapper::default();
        for &(px, py) in &[
            (50.0_f32, 20.0_f32),
            (315.0, 185.0),
            (580.0, 350.0),
            (137.5, 244.25),
        ] {
            let (x, y) = m.to_logical(px, py);
            let (px2, py2) = m.to_pixel(x, y);
            assert!((px - px2).abs() < 1e-3, "x round trip {px} -> {px2}");
            assert!((py - py2).abs() < 1e-3, "y round trip {py} -> {py2}");
        }
    }

    #[test]
    fn round_trip_logical_to_pixel_and_back() {
        let m = PlotMapper::default();
        for &(x, y) in &[(0.0_f64, 0.0_f64), (5.0, 5.0), (10.0, 10.0), (2.75, 9.1)] {
            let (px, py) = m.to_pixel(x, y);
            let (x2, y2) = m.to_logical(px, py);
            assert!((x - x2).abs() < EPS, "x round trip {x} -> {x2}");
            assert!((y - y2).abs() < EPS, "y round trip {y} -> {y2}");
        }
    }

    #[test]
    fn plot_center_maps_to_domain_center() {
        let m = PlotMapper::default();
        let g = *m.geometry();
        let (x, y) = m.to_logical(
            g.margin.left + g.plot_width() / 2.0,
            g.margin.top + g.plot_height() / 2.0,
        );
        assert!((x - 5.0).abs() < EPS);
        assert!((y - 5.0).abs() < EPS);
    }

    #[test]
    fn no_clamping_outside_plot_area() {
        let m = PlotMapper::default();
        // Left of the plot area -> negative x.
        let (x, _) = m.to_logical(10.0, 100.0);
        assert!(x < 0.0, "positions left of the margin map below the domain");
        // Below the plot area -> negative y.
        let (_, y) = m.to_logical(300.0, 390.0);
        assert!(y < 0.0, "positions below the plot area map below the domain");
        // Logical coordinates beyond the domain map outside the plot area.
        let (px, _) = m.to_pixel(12.0, 5.0);
        assert!(px > m.geometry().margin.left + m.geometry().plot_width());
        assert!(!m.in_plot_area(px, 100.0));
    }
}
