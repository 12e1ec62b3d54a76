//! Application shell for DotGrid.
//!
//! [`DotGridApp`] owns the dot store, the interaction state, and the two
//! panels (canvas + table), and wires them into the eframe event loop.
//! Each frame it first drains the sink command channel, then renders; a
//! frame therefore always shows the effect of commands received before it.

mod run;

pub use run::run_dotgrid;

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::{DotGridConfig, FeatureFlags, MarkLook};
use crate::data::DotGridData;
use crate::data::DotStore;
use crate::events::{DotMeta, EventController, EventKind, PlotEvent};
use crate::interaction::{DotInteraction, DragState};
use crate::mapper::PlotMapper;
use crate::panels::{CanvasPanel, Panel, TablePanel};
use crate::sink::DotCommand;

/// The DotGrid application: scatter canvas plus synchronized data table.
pub struct DotGridApp {
    /// Command channel from embedding code; `None` when driven purely by
    /// pointer input.
    pub rx: Option<Receiver<DotCommand>>,

    /// Committed dots.
    pub store: DotStore,

    /// Drag state machine and create/move operations.
    pub interaction: DotInteraction,

    /// Pixel ↔ logical mapping for the fixed canvas geometry.
    pub mapper: PlotMapper,

    /// Mark appearance.
    pub look: MarkLook,

    /// UI feature toggles.
    pub features: FeatureFlags,

    canvas: CanvasPanel,
    table: TablePanel,

    event_ctrl: Option<EventController>,
}

impl DotGridApp {
    /// Create an app that ingests [`DotCommand`]s from the given channel.
    pub fn new(rx: Receiver<DotCommand>) -> Self {
        Self {
            rx: Some(rx),
            ..Self::detached()
        }
    }

    /// Create an app without a command channel (pointer input only).
    pub fn detached() -> Self {
        Self {
            rx: None,
            store: DotStore::new(),
            interaction: DotInteraction::new(),
            mapper: PlotMapper::default(),
            look: MarkLook::default(),
            features: FeatureFlags::default(),
            canvas: CanvasPanel::default(),
            table: TablePanel::default(),
            event_ctrl: None,
        }
    }

    /// Apply geometry, look, feature flags and the event controller from a
    /// config. Call once before entering the event loop.
    pub fn apply_config(&mut self, cfg: &DotGridConfig) {
        self.mapper = PlotMapper::new(cfg.geometry);
        self.look = cfg.look;
        self.features = cfg.features;
        self.event_ctrl = cfg.event_controller.clone();
    }

    /// Drain all pending sink commands into the store.
    pub fn ingest_commands(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = &self.rx {
            while let Ok(cmd) = rx.try_recv() {
                pending.push(cmd);
            }
        }
        for cmd in pending {
            match cmd {
                DotCommand::Add { x, y } => self.add_from_sink(x, y),
                DotCommand::ClearAll => self.clear_all(),
            }
        }
    }

    fn add_from_sink(&mut self, x: f64, y: f64) {
        let dot = self.store.add_at(x, y);
        if let Some(ev) = &self.event_ctrl {
            ev.emit(PlotEvent::new(EventKind::DOT_ADDED).with_dot(DotMeta {
                id: dot.id,
                logical: [dot.x, dot.y],
                pixel: None,
            }));
        }
    }

    /// Remove every dot, aborting an in-flight drag first.
    pub fn clear_all(&mut self) {
        self.interaction.cancel_drag();
        self.store.clear_all();
        if let Some(ev) = &self.event_ctrl {
            ev.emit(PlotEvent::new(EventKind::DATA_CLEARED));
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        let mut clear_clicked = false;
        egui::TopBottomPanel::top("dotgrid_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("DotGrid");
                ui.separator();
                ui.label(format!("{} dots", self.store.len()));
                if self.interaction.state() == DragState::Dragging {
                    ui.separator();
                    ui.weak("dragging… Esc cancels");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("{} Clear All", egui_phosphor::regular::TRASH))
                        .clicked()
                    {
                        clear_clicked = true;
                    }
                });
            });
        });
        if clear_clicked {
            self.clear_all();
        }
    }

    fn render_panels(&mut self, ctx: &egui::Context) {
        let Self {
            store,
            interaction,
            mapper,
            look,
            features,
            canvas,
            table,
            event_ctrl,
            ..
        } = self;
        let events = event_ctrl.as_ref();

        if features.table && table.state().visible {
            // Dock the table to the right when the window is wide enough,
            // otherwise to the bottom.
            let geom = mapper.geometry();
            let wide = ctx.screen_rect().width() >= geom.viewport[0] + 320.0;
            if wide {
                egui::SidePanel::right("dots_table_panel")
                    .resizable(true)
                    .default_width(300.0)
                    .show(ctx, |ui| {
                        ui.heading(table.title_and_icon());
                        ui.separator();
                        let mut data = DotGridData {
                            store: &mut *store,
                            interaction: &mut *interaction,
                            mapper: &*mapper,
                            look: &*look,
                            features: &*features,
                            events,
                        };
                        table.render_panel(ui, &mut data);
                    });
            } else {
                egui::TopBottomPanel::bottom("dots_table_panel")
                    .resizable(true)
                    .default_height(180.0)
                    .show(ctx, |ui| {
                        ui.heading(table.title_and_icon());
                        ui.separator();
                        let mut data = DotGridData {
                            store: &mut *store,
                            interaction: &mut *interaction,
                            mapper: &*mapper,
                            look: &*look,
                            features: &*features,
                            events,
                        };
                        table.render_panel(ui, &mut data);
                    });
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut data = DotGridData {
                store: &mut *store,
                interaction: &mut *interaction,
                mapper: &*mapper,
                look: &*look,
                features: &*features,
                events,
            };
            canvas.render_panel(ui, &mut data);
        });
    }
}

impl eframe::App for DotGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ingest_commands();
        if self.features.toolbar {
            self.render_toolbar(ctx);
        }
        self.render_panels(ctx);

        // Sink commands can arrive while no input events do; keep polling.
        if self.rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
