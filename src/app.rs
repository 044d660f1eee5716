use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WorkforceDashApp {
    pub state: AppState,
}

impl WorkforceDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for WorkforceDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and load status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the four chart sections ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::employment_section(ui, &self.state);
                    ui.separator();
                    panels::location_section(ui, &mut self.state);
                    ui.separator();
                    panels::gender_section(ui, &mut self.state);
                    ui.separator();
                    panels::industry_section(ui, &mut self.state);
                });
        });
    }
}
