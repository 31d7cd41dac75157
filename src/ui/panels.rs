use eframe::egui::{self, Color32, RichText, Ui};

use crate::export;
use crate::state::AppState;

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
            ui.separator();
            let has_scene = state.scene.is_some();
            if ui.add_enabled(has_scene, egui::Button::new("Export SVG…")).clicked() {
                export_dialog(state, ExportKind::Svg);
                ui.close_menu();
            }
            if ui.add_enabled(has_scene, egui::Button::new("Export CSV…")).clicked() {
                export_dialog(state, ExportKind::Csv);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let (first, last) = ds.year_extent();
            ui.label(format!("{} monthly records, {first}–{last}", ds.len()));
        } else if state.loading {
            ui.label("Fetching dataset…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open temperature dataset")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.report_error(format!("Error: {e:#}"));
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ExportKind {
    Svg,
    Csv,
}

fn export_dialog(state: &mut AppState, kind: ExportKind) {
    let Some(scene) = &state.scene else {
        return;
    };
    let (label, ext, default_name) = match kind {
        ExportKind::Svg => ("SVG", "svg", "heatmap.svg"),
        ExportKind::Csv => ("CSV", "csv", "heatmap.csv"),
    };
    let Some(path) = rfd::FileDialog::new()
        .set_title(format!("Export {label}"))
        .add_filter(label, &[ext])
        .set_file_name(default_name)
        .save_file()
    else {
        return;
    };

    let result = match kind {
        ExportKind::Svg => export::save_svg(scene, &path),
        ExportKind::Csv => export::save_csv(scene, &path),
    };
    match result {
        Ok(()) => {
            log::info!("Exported {label} to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            state.report_error(format!("Error: {e:#}"));
        }
    }
}
