use eframe::egui;

use crate::figure::Figure;
use crate::state::AppState;
use crate::ui::{panels, scatter};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScatterApp {
    pub state: AppState,
}

impl ScatterApp {
    pub fn new(figure: Figure) -> Self {
        Self {
            state: AppState::new(figure),
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: style and ranges ----
        egui::SidePanel::left("style_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 3D scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            scatter::scatter_view(ui, &mut self.state);
        });
    }
}
