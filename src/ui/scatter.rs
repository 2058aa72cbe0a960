use eframe::egui::{self, Align2, FontId, Mesh, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::camera::{project_with, Projected};
use crate::state::AppState;

/// Horizontal space reserved right of the cube for the colour bar.
const COLORBAR_WIDTH: f32 = 70.0;
/// Extra pick radius around a marker, in points.
const HOVER_SLACK: f32 = 3.0;

// ---------------------------------------------------------------------------
// 3D scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the interactive 3D scatter in the central panel.
pub fn scatter_view(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.figure.style.title.as_str());
    });

    let size = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

    let cube_rect = Rect::from_min_max(
        rect.min,
        Pos2::new((rect.max.x - COLORBAR_WIDTH).max(rect.min.x + 1.0), rect.max.y),
    );

    // ---- Camera interaction ----
    if response.dragged() {
        let d = response.drag_delta();
        state.camera.rotate(d.x, d.y);
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            state.camera.zoom(scroll);
        }
    }
    if response.double_clicked() {
        state.camera.reset();
    }

    let painter = ui.painter_at(rect);
    let (w, h) = (cube_rect.width(), cube_rect.height());
    let vp = state.camera.view_projection(w / h.max(1.0));
    let eye = state.camera.eye();
    let to_screen = |p: [f32; 3]| -> Option<(Pos2, f32)> {
        project_with(&vp, eye, p, w, h)
            .map(|Projected { screen, depth }| (cube_rect.min + Vec2::new(screen[0], screen[1]), depth))
    };

    draw_cube(&painter, ui, &to_screen);
    draw_axis_labels(&painter, ui, state, &to_screen);

    // ---- Markers, back to front ----
    let projected: Vec<Option<(Pos2, f32)>> = state
        .figure
        .markers
        .iter()
        .map(|m| to_screen(m.normalized))
        .collect();
    let depths: Vec<Option<f32>> = projected.iter().map(|p| p.map(|(_, d)| d)).collect();
    let order = crate::figure::Figure::paint_order(&depths);

    let radius = state.figure.style.marker_size * 0.5;
    for &i in &order {
        if let Some((pos, _)) = projected[i] {
            let marker = &state.figure.markers[i];
            painter.circle_filled(pos, radius, state.figure.fill(marker));
        }
    }

    // ---- Hover ----
    state.hovered = response
        .hover_pos()
        .and_then(|pointer| pick(&projected, pointer, radius + HOVER_SLACK));

    draw_colorbar(&painter, ui, state, rect);

    if let Some(i) = state.hovered {
        if let Some((pos, _)) = projected[i] {
            painter.circle_stroke(pos, radius + 2.0, Stroke::new(1.5, ui.visuals().strong_text_color()));
        }
        let marker = state.figure.markers[i];
        let titles = state.figure.style.axis_titles.clone();
        response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            ui.label(format!("row {}", i + 1));
            ui.label(format!("{}: {}", titles[0], format_tick(marker.point.x)));
            ui.label(format!("{}: {}", titles[1], format_tick(marker.point.y)));
            ui.label(format!("{}: {}", titles[2], format_tick(marker.point.z)));
        });
    }
}

/// Index of the front-most marker within `max_dist` of `pointer`.
fn pick(projected: &[Option<(Pos2, f32)>], pointer: Pos2, max_dist: f32) -> Option<usize> {
    projected
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.map(|(pos, depth)| (i, pos.distance(pointer), depth)))
        .filter(|&(_, dist, _)| dist <= max_dist)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(i, _, _)| i)
}

// ---------------------------------------------------------------------------
// Cube, axes, colour bar
// ---------------------------------------------------------------------------

const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0), // bottom
    (4, 5), (5, 6), (6, 7), (7, 4), // top
    (0, 4), (1, 5), (2, 6), (3, 7), // verticals
];

fn draw_cube(painter: &egui::Painter, ui: &Ui, to_screen: &impl Fn([f32; 3]) -> Option<(Pos2, f32)>) {
    let stroke = Stroke::new(1.0, ui.visuals().text_color().gamma_multiply(0.3));
    for (a, b) in EDGES {
        if let (Some((pa, _)), Some((pb, _))) = (to_screen(CORNERS[a]), to_screen(CORNERS[b])) {
            painter.line_segment([pa, pb], stroke);
        }
    }
}

fn draw_axis_labels(
    painter: &egui::Painter,
    ui: &Ui,
    state: &AppState,
    to_screen: &impl Fn([f32; 3]) -> Option<(Pos2, f32)>,
) {
    let text_color = ui.visuals().text_color();
    let dim_color = text_color.gamma_multiply(0.7);
    let title_font = FontId::proportional(14.0);
    let tick_font = FontId::proportional(10.0);

    let bounds = &state.figure.cloud.bounds;
    let titles = &state.figure.style.axis_titles;

    // Axis titles sit beyond the middle of one edge per axis.
    let title_pos = [[0.0, -1.35, -1.0], [-1.35, 0.0, -1.0], [-1.2, -1.2, 0.0]];
    for (axis, pos) in title_pos.into_iter().enumerate() {
        if let Some((p, _)) = to_screen(pos) {
            painter.text(p, Align2::CENTER_CENTER, &titles[axis], title_font.clone(), text_color);
        }
    }

    for t in [0.0_f32, 0.5, 1.0] {
        let c = -1.0 + 2.0 * t;
        let ticks = [[c, -1.15, -1.0], [-1.15, c, -1.0], [-1.1, -1.1, c]];
        for (axis, pos) in ticks.into_iter().enumerate() {
            if let Some((p, _)) = to_screen(pos) {
                let label = format_tick(bounds.lerp(axis, t as f64));
                painter.text(p, Align2::CENTER_CENTER, label, tick_font.clone(), dim_color);
            }
        }
    }
}

fn draw_colorbar(painter: &egui::Painter, ui: &Ui, state: &AppState, rect: Rect) {
    const STEPS: usize = 32;

    let bar = Rect::from_min_size(
        Pos2::new(rect.max.x - COLORBAR_WIDTH + 10.0, rect.min.y + rect.height() * 0.15),
        Vec2::new(14.0, rect.height() * 0.7),
    );
    if bar.height() <= 0.0 {
        return;
    }

    // Bottom = min, top = max.
    let colors = state.figure.color_scale.gradient(STEPS);
    let mut mesh = Mesh::default();
    for (i, &color) in colors.iter().enumerate() {
        let y = bar.max.y - bar.height() * i as f32 / (STEPS - 1) as f32;
        mesh.colored_vertex(Pos2::new(bar.min.x, y), color);
        mesh.colored_vertex(Pos2::new(bar.max.x, y), color);
        if i > 0 {
            let base = (2 * i) as u32;
            mesh.add_triangle(base - 2, base - 1, base);
            mesh.add_triangle(base - 1, base + 1, base);
        }
    }
    painter.add(egui::Shape::mesh(mesh));

    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(10.0);
    let scale = state.figure.color_scale;
    let label_x = bar.max.x + 4.0;
    painter.text(Pos2::new(label_x, bar.min.y), Align2::LEFT_CENTER, format_tick(scale.max), font.clone(), text_color);
    painter.text(
        Pos2::new(label_x, bar.center().y),
        Align2::LEFT_CENTER,
        format_tick((scale.min + scale.max) * 0.5),
        font.clone(),
        text_color,
    );
    painter.text(Pos2::new(label_x, bar.max.y), Align2::LEFT_CENTER, format_tick(scale.min), font, text_color);
    painter.text(
        Pos2::new(bar.center().x, bar.min.y - 12.0),
        Align2::CENTER_CENTER,
        &state.figure.style.axis_titles[2],
        FontId::proportional(12.0),
        text_color,
    );
}

/// Compact number formatting for ticks and tooltips.
fn format_tick(v: f64) -> String {
    let a = v.abs();
    if v == 0.0 {
        "0".to_string()
    } else if !v.is_finite() {
        v.to_string()
    } else if !(1e-3..1e4).contains(&a) {
        format!("{v:.2e}")
    } else {
        format!("{v:.3}")
    }
}
