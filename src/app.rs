use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{chart, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ThermalPandaApp {
    pub state: AppState,
}

impl ThermalPandaApp {
    /// Start the one-shot dataset fetch; the window opens immediately.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::default();
        let rx = loader::spawn_fetch(state.config.dataset_url.clone(), cc.egui_ctx.clone());
        state.begin_fetch(rx);
        Self { state }
    }
}

impl eframe::App for ThermalPandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_fetch();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: heat map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::heat_map(ui, &mut self.state);
        });
    }
}
