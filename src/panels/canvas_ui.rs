//! The scatter canvas: fixed-geometry viewport, axes, marks, and the
//! pointer interactions that create and move dots.
//!
//! The canvas allocates exactly the configured viewport and paints with a
//! clipped painter, so marks dragged outside the axes stay visible inside
//! the viewport and disappear past its edge. All pixel ↔ logical
//! conversion goes through the [`PlotMapper`](crate::mapper::PlotMapper);
//! the canvas itself never does coordinate math.

use egui::{pos2, vec2, Align2, CursorIcon, FontId, Pos2, Sense, Ui};

use crate::data::{Dot, DotGridData};
use crate::events::{DotMeta, EventKind, PlotEvent};
use crate::interaction::DragState;

use super::panel_trait::{Panel, PanelState};

pub struct CanvasPanel {
    pub state: PanelState,
}

impl Default for CanvasPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Canvas", egui_phosphor::regular::CHART_SCATTER),
        }
    }
}

impl Panel for CanvasPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, data: &mut DotGridData<'_>) {
        let geom = *data.mapper.geometry();
        let (rect, response) =
            ui.allocate_exact_size(vec2(geom.viewport[0], geom.viewport[1]), Sense::click_and_drag());
        let origin = rect.min;

        // Interactions first so this frame already renders their effect.
        handle_pointer(&response, origin, data);

        let painter = ui.painter().with_clip_rect(rect);
        painter.rect_filled(rect, egui::CornerRadius::same(2), ui.visuals().extreme_bg_color);
        if data.features.grid {
            paint_grid(ui, &painter, origin, data);
        }
        if data.features.axes {
            paint_axes(ui, &painter, origin, data);
        }
        paint_marks(&painter, origin, data);

        if data.features.pointer_readout {
            if let Some(pos) = response.hover_pos() {
                let (px, py) = (pos.x - origin.x, pos.y - origin.y);
                if data.mapper.in_plot_area(px, py) {
                    let (x, y) = data.mapper.to_logical(px, py);
                    ui.monospace(format!("x = {x:.2}   y = {y:.2}"));
                }
            }
        }
    }
}

/// Route pointer events into the interaction controller.
fn handle_pointer(response: &egui::Response, origin: Pos2, data: &mut DotGridData<'_>) {
    let rel = |pos: Pos2| (pos.x - origin.x, pos.y - origin.y);

    // Escape aborts the in-flight drag; the mark snaps back.
    if data.interaction.state() == DragState::Dragging
        && response.ctx.input(|i| i.key_pressed(egui::Key::Escape))
    {
        if let Some(dropped) = data.interaction.cancel_drag() {
            emit_dot(data, EventKind::DRAG_CANCELLED, dropped, None);
        }
        return;
    }

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (px, py) = rel(pos);
            if let Some(dot) = hit_test(data, px, py) {
                if data.interaction.begin_drag(dot) {
                    emit_dot(data, EventKind::DRAG_STARTED, dot, Some([px, py]));
                }
            }
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (px, py) = rel(pos);
            if let Some(moved) = data.interaction.update_drag(data.mapper, px, py) {
                emit_dot(data, EventKind::DRAG_MOVED, moved, Some([px, py]));
            }
        }
    }

    if response.drag_stopped() && data.interaction.state() == DragState::Dragging {
        // Commit at the release position. Should the release ever arrive
        // without a pointer position, the working copy's own position is
        // already final.
        let (px, py) = match response.interact_pointer_pos() {
            Some(pos) => rel(pos),
            None => {
                let cur = data.interaction.session().map(|s| s.current);
                match cur {
                    Some(c) => data.mapper.to_pixel(c.x, c.y),
                    None => return,
                }
            }
        };
        if let Some(committed) = data.interaction.end_drag(data.store, data.mapper, px, py) {
            emit_dot(data, EventKind::DRAG_COMMITTED, committed, Some([px, py]));
        }
    }

    // Double-click on the background creates a dot; a double-click that
    // lands on an existing mark does not.
    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (px, py) = rel(pos);
            if hit_test(data, px, py).is_none() && data.interaction.state() == DragState::Idle {
                let dot = data.interaction.create_dot(data.store, data.mapper, px, py);
                emit_dot(data, EventKind::DOT_ADDED, dot, Some([px, py]));
            }
        }
    }

    // Cursor feedback: grab hand over a mark, closed hand while dragging.
    if data.interaction.state() == DragState::Dragging {
        response.ctx.set_cursor_icon(CursorIcon::Grabbing);
    } else if let Some(pos) = response.hover_pos() {
        let (px, py) = rel(pos);
        if hit_test(data, px, py).is_some() {
            response.ctx.set_cursor_icon(CursorIcon::Grab);
        }
    }
}

/// Nearest committed dot whose rendered mark is within grab range of the
/// given pixel position.
fn hit_test(data: &DotGridData<'_>, px: f32, py: f32) -> Option<Dot> {
    let grab = data.look.radius + data.look.grab_slack;
    let grab2 = grab * grab;
    let mut best: Option<(f32, Dot)> = None;
    for &dot in data.store.dots() {
        let shown = data.interaction.visual_override(dot.id).unwrap_or(dot);
        let (cx, cy) = data.mapper.to_pixel(shown.x, shown.y);
        let (dx, dy) = (cx - px, cy - py);
        let d2 = dx * dx + dy * dy;
        if d2 <= grab2 && best.map_or(true, |(b, _)| d2 < b) {
            best = Some((d2, dot));
        }
    }
    best.map(|(_, dot)| dot)
}

fn emit_dot(data: &DotGridData<'_>, kinds: EventKind, dot: Dot, pixel: Option<[f32; 2]>) {
    if let Some(events) = data.events {
        events.emit(PlotEvent::new(kinds).with_dot(DotMeta {
            id: dot.id,
            logical: [dot.x, dot.y],
            pixel,
        }));
    }
}

fn domain_ticks(domain: [f64; 2]) -> Vec<f64> {
    let step = (domain[1] - domain[0]) / 10.0;
    (0..=10).map(|i| domain[0] + step * i as f64).collect()
}

fn paint_grid(ui: &Ui, painter: &egui::Painter, origin: Pos2, data: &DotGridData<'_>) {
    let g = data.mapper.geometry();
    let stroke = egui::Stroke::new(0.5, ui.visuals().widgets.noninteractive.bg_stroke.color);
    for &tx in &domain_ticks(g.x_domain) {
        let (px, _) = data.mapper.to_pixel(tx, g.y_domain[0]);
        painter.line_segment(
            [
                pos2(origin.x + px, origin.y + g.margin.top),
                pos2(origin.x + px, origin.y + g.margin.top + g.plot_height()),
            ],
            stroke,
        );
    }
    for &ty in &domain_ticks(g.y_domain) {
        let (_, py) = data.mapper.to_pixel(g.x_domain[0], ty);
        painter.line_segment(
            [
                pos2(origin.x + g.margin.left, origin.y + py),
                pos2(origin.x + g.margin.left + g.plot_width(), origin.y + py),
            ],
            stroke,
        );
    }
}

fn paint_axes(ui: &Ui, painter: &egui::Painter, origin: Pos2, data: &DotGridData<'_>) {
    let g = data.mapper.geometry();
    let color = ui.visuals().text_color();
    let stroke = egui::Stroke::new(1.0, color);
    let font = FontId::proportional(11.0);

    let x0 = origin.x + g.margin.left;
    let x1 = origin.x + g.margin.left + g.plot_width();
    let y0 = origin.y + g.margin.top;
    let y1 = origin.y + g.margin.top + g.plot_height();

    // Axis lines: x along the bottom of the plot area, y along the left.
    painter.line_segment([pos2(x0, y1), pos2(x1, y1)], stroke);
    painter.line_segment([pos2(x0, y0), pos2(x0, y1)], stroke);

    for &tx in &domain_ticks(g.x_domain) {
        let (px, _) = data.mapper.to_pixel(tx, g.y_domain[0]);
        let x = origin.x + px;
        painter.line_segment([pos2(x, y1), pos2(x, y1 + 4.0)], stroke);
        if data.features.tick_labels {
            painter.text(
                pos2(x, y1 + 6.0),
                Align2::CENTER_TOP,
                format_tick(tx),
                font.clone(),
                color,
            );
        }
    }
    for &ty in &domain_ticks(g.y_domain) {
        let (_, py) = data.mapper.to_pixel(g.x_domain[0], ty);
        let y = origin.y + py;
        painter.line_segment([pos2(x0 - 4.0, y), pos2(x0, y)], stroke);
        if data.features.tick_labels {
            painter.text(
                pos2(x0 - 6.0, y),
                Align2::RIGHT_CENTER,
                format_tick(ty),
                font.clone(),
                color,
            );
        }
    }
}

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Paint one mark per dot. The dragged mark is drawn last (top of the
/// z-order) from the session's working copy, with the active stroke.
fn paint_marks(painter: &egui::Painter, origin: Pos2, data: &DotGridData<'_>) {
    let dragged = data.interaction.dragged_id();
    for &dot in data.store.dots() {
        if Some(dot.id) == dragged {
            continue;
        }
        let (px, py) = data.mapper.to_pixel(dot.x, dot.y);
        painter.circle(
            pos2(origin.x + px, origin.y + py),
            data.look.radius,
            data.look.fill,
            data.look.stroke,
        );
    }
    if let Some(session) = data.interaction.session() {
        let cur = session.current;
        let (px, py) = data.mapper.to_pixel(cur.x, cur.y);
        painter.circle(
            pos2(origin.x + px, origin.y + py),
            data.look.radius,
            data.look.fill,
            data.look.active_stroke,
        );
    }
}
