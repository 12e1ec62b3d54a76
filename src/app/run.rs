//! Top-level entry point for running DotGrid as a native window.
//!
//! The [`run_dotgrid`] function is the primary public API for launching
//! the widget. It accepts a command channel receiver and a configuration
//! object, constructs the app, and enters the eframe event loop.

use eframe::egui;

use crate::config::DotGridConfig;
use crate::sink::DotCommand;

use super::DotGridApp;

/// Launch DotGrid in a native window.
///
/// This is the main entry point for standalone use. It:
///
/// 1. Constructs a [`DotGridApp`] fed by the given command channel.
/// 2. Applies the configuration (geometry, mark look, feature flags,
///    event controller).
/// 3. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_dotgrid(
    rx: std::sync::mpsc::Receiver<DotCommand>,
    mut cfg: DotGridConfig,
) -> eframe::Result<()> {
    let mut app = DotGridApp::new(rx);
    app.apply_config(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Default window size: canvas plus the side table and chrome.
    if opts.viewport.inner_size.is_none() {
        let g = cfg.geometry;
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(g.viewport[0] + 360.0, g.viewport[1] + 96.0));
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install the Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
