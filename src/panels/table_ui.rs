//! The data table mirroring the dot list: one row per dot, columns
//! `ID` / `X-Axis` / `Y-Axis`.
//!
//! The table is a read-only observer of the store snapshot. While a drag
//! is in flight the dragged dot's row shows the session's working copy, so
//! the table tracks the pointer just like the canvas does.

use egui::Ui;
use egui_table::{HeaderRow as EgHeaderRow, Table, TableDelegate};

use crate::data::{Dot, DotGridData, DotStore};
use crate::interaction::DotInteraction;

use super::panel_trait::{Panel, PanelState};

/// Row list for the table: the committed dots in insertion order, with the
/// in-flight drag override applied.
pub fn table_rows(store: &DotStore, interaction: &DotInteraction) -> Vec<Dot> {
    store
        .dots()
        .iter()
        .map(|&dot| interaction.visual_override(dot.id).unwrap_or(dot))
        .collect()
}

pub struct TablePanel {
    pub state: PanelState,
}

impl Default for TablePanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Dots", egui_phosphor::regular::TABLE),
        }
    }
}

impl Panel for TablePanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut DotGridData<'_>) {
        let rows = table_rows(data.store, data.interaction);

        ui.horizontal(|ui| {
            ui.label(format!("{} dots", rows.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("Copy JSON")
                    .on_hover_text("Copy the dot list to the clipboard as JSON")
                    .clicked()
                {
                    if let Ok(json) = serde_json::to_string_pretty(&rows) {
                        ui.ctx().copy_text(json);
                    }
                }
            });
        });
        ui.separator();

        if rows.is_empty() {
            ui.label("Double-click the canvas to add a dot.");
            return;
        }

        // Delegate for table rendering
        struct DotsDelegate {
            rows: Vec<Dot>,
            col_w: [f32; 3],
        }
        impl TableDelegate for DotsDelegate {
            fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
                let col = cell.col_range.start;
                let (rect, _resp) =
                    ui.allocate_exact_size(egui::vec2(self.col_w[col], 20.0), egui::Sense::hover());
                ui.scope_builder(
                    egui::UiBuilder::new()
                        .max_rect(rect)
                        .layout(egui::Layout::left_to_right(egui::Align::Center)),
                    |inner| {
                        let text = match col {
                            0 => "ID",
                            1 => "X-Axis",
                            2 => "Y-Axis",
                            _ => "",
                        };
                        inner.add_space(4.0);
                        inner.strong(text);
                    },
                );
            }

            fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
                let row = cell.row_nr as usize;
                let col = cell.col_nr;
                if row >= self.rows.len() {
                    return;
                }
                let dot = self.rows[row];
                let (rect, _resp) =
                    ui.allocate_exact_size(egui::vec2(self.col_w[col], 20.0), egui::Sense::hover());
                ui.scope_builder(
                    egui::UiBuilder::new()
                        .max_rect(rect)
                        .layout(egui::Layout::left_to_right(egui::Align::Center)),
                    |inner| {
                        inner.add_space(4.0);
                        match col {
                            0 => {
                                inner.monospace(dot.id.to_string());
                            }
                            1 => {
                                inner.monospace(format!("{:.3}", dot.x));
                            }
                            2 => {
                                inner.monospace(format!("{:.3}", dot.y));
                            }
                            _ => {}
                        }
                    },
                );
            }
        }

        // Column widths: ID stays at its minimum, X/Y share the extra space.
        let avail_w = ui.available_width();
        let min_w = [48.0_f32, 110.0, 110.0];
        let mut w = min_w;
        let sum_min: f32 = w.iter().sum();
        if avail_w > sum_min {
            let extra = (avail_w - sum_min) / 2.0;
            w[1] = min_w[1] + extra;
            w[2] = min_w[2] + extra;
        }

        let cols = vec![
            egui_table::Column::new(w[0]),
            egui_table::Column::new(w[1]),
            egui_table::Column::new(w[2]),
        ];

        let num_rows = rows.len() as u64;
        let mut delegate = DotsDelegate { rows, col_w: w };

        // Rows beyond the visible height scroll (egui_table virtualizes).
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                Table::new()
                    .id_salt("dots_table")
                    .num_rows(num_rows)
                    .columns(cols)
                    .headers(vec![EgHeaderRow::new(24.0)])
                    .show(ui, &mut delegate);
            });
    }
}
