use eframe::egui::{
    self, Align2, Color32, FontId, Id, Order, Painter, Pos2, Sense, Stroke, Ui, Vec2, vec2,
};

use crate::chart::scene::{Axis, AxisOrient, Scene, TextLabel};
use crate::chart::tooltip::{Placement, TooltipContent, TooltipState};
use crate::color::to_color32;
use crate::state::AppState;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;

// ---------------------------------------------------------------------------
// Heat map canvas (central panel)
// ---------------------------------------------------------------------------

/// Paint the heat map and run one frame of tooltip handling.
pub fn heat_map(ui: &mut Ui, state: &mut AppState) {
    let viewport = ui.available_size();
    let loading = state.loading;
    let Some(scene) = state.ensure_scene(viewport) else {
        if loading {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.spinner();
            });
        }
        return;
    };

    let canvas = vec2(scene.layout.canvas_width, scene.layout.canvas_height);
    let (response, painter) = ui.allocate_painter(canvas, Sense::hover());
    let origin = response.rect.min;
    let ink = ui.visuals().text_color();
    paint_scene(&painter, origin, scene, ink);

    let pointer = response.hover_pos().map(|p| p - origin.to_vec2());
    let hovered = pointer.and_then(|p| scene.cell_at(p)).map(|c| c.record);
    let base_temperature = scene.base_temperature;

    state.apply_hover(hovered, pointer);
    show_tooltip(ui.ctx(), state, origin, canvas, base_temperature);
}

fn paint_scene(painter: &Painter, origin: Pos2, scene: &Scene, ink: Color32) {
    paint_text(painter, origin, &scene.title, 24.0, ink);
    paint_text(painter, origin, &scene.description, 16.0, ink);

    let chart = origin + scene.chart_origin.to_vec2();
    for cell in &scene.cells {
        painter.rect_filled(cell.rect.translate(chart.to_vec2()), 0.0, to_color32(cell.fill));
    }
    paint_axis(painter, chart, &scene.x_axis, ink);
    paint_axis(painter, chart, &scene.y_axis, ink);

    let legend = origin + scene.legend.origin.to_vec2();
    for swatch in &scene.legend.swatches {
        painter.rect_filled(swatch.rect.translate(legend.to_vec2()), 0.0, to_color32(swatch.fill));
    }
    paint_axis(painter, legend, &scene.legend.axis, ink);
}

fn paint_text(painter: &Painter, origin: Pos2, label: &TextLabel, size: f32, ink: Color32) {
    painter.text(
        origin + label.pos.to_vec2(),
        Align2::CENTER_BOTTOM,
        &label.text,
        FontId::proportional(size),
        ink,
    );
}

fn paint_axis(painter: &Painter, group: Pos2, axis: &Axis, ink: Color32) {
    let start = group + axis.origin.to_vec2();
    let stroke = Stroke::new(1.0, ink);
    let font = FontId::proportional(10.0);

    let (along, across, align) = match axis.orient {
        AxisOrient::Bottom => (vec2(1.0, 0.0), vec2(0.0, 1.0), Align2::CENTER_TOP),
        AxisOrient::Left => (vec2(0.0, 1.0), vec2(-1.0, 0.0), Align2::RIGHT_CENTER),
    };
    if axis.domain_line {
        painter.line_segment([start, start + along * axis.length], stroke);
    }
    for tick in &axis.ticks {
        let at = start + along * tick.offset;
        painter.line_segment([at, at + across * TICK_SIZE], stroke);
        painter.text(
            at + across * (TICK_SIZE + TICK_PADDING),
            align,
            &tick.label,
            font.clone(),
            ink,
        );
    }
}

// ---------------------------------------------------------------------------
// Tooltip effect step
// ---------------------------------------------------------------------------

/// Show the tooltip for the current state; nothing is drawn while hidden.
fn show_tooltip(ctx: &egui::Context, state: &AppState, origin: Pos2, canvas: Vec2, base: f64) {
    let TooltipState::Visible { record, pointer } = state.tooltip else {
        return;
    };
    let cfg = &state.config;
    let size = vec2(cfg.tooltip_width, cfg.tooltip_height);
    let placement = Placement::compute(pointer, size, cfg.tooltip_offset, canvas);
    let corner = placement.min_corner(size, canvas);
    let content = TooltipContent::new(&record, base);
    log::trace!("tooltip data-year={} at {corner:?}", content.data_year);

    egui::Area::new(Id::new("tooltip"))
        .order(Order::Tooltip)
        .interactable(false)
        .fixed_pos(origin + corner.to_vec2())
        .show(ctx, |ui: &mut Ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui: &mut Ui| {
                ui.set_min_size(size - vec2(12.0, 12.0));
                ui.label(content.text());
            });
        });
}
