use eframe::egui::{self, Color32, Grid, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – marker style and data ranges
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Markers");
    ui.separator();

    let style = &mut state.figure.style;
    ui.add(egui::Slider::new(&mut style.marker_size, 1.0..=16.0).text("Size"));
    ui.add(egui::Slider::new(&mut style.opacity, 0.05..=1.0).text("Opacity"));

    ui.add_space(8.0);
    ui.heading("Data");
    ui.separator();

    let cloud = &state.figure.cloud;
    if let Some(src) = &cloud.source {
        ui.label(RichText::new(src.display().to_string()).weak());
    }
    if cloud.is_empty() {
        ui.label("No points.");
        return;
    }

    let axis_titles = state.figure.style.axis_titles.clone();
    Grid::new("ranges").striped(true).show(ui, |ui: &mut Ui| {
        ui.strong("");
        ui.strong("min");
        ui.strong("max");
        ui.end_row();
        for (axis, title) in axis_titles.iter().enumerate() {
            ui.label(title.as_str());
            ui.label(format!("{:.4}", cloud.bounds.min[axis]));
            ui.label(format!("{:.4}", cloud.bounds.max[axis]));
            ui.end_row();
        }
    });

    if let Some(idx) = state.hovered {
        if let Some(marker) = state.figure.markers.get(idx) {
            ui.add_space(8.0);
            ui.label(format!("Row {}: {}", idx + 1, marker.point));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Reset view").clicked() {
            state.camera.reset();
        }

        ui.separator();

        ui.label(format!("{} points", state.figure.markers.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open x/y/z data")
        .add_filter("Text tables", &["txt", "dat", "xyz"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
