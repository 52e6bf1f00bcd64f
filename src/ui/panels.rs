use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::theme;

// ---------------------------------------------------------------------------
// Left side panel – concert type filter
// ---------------------------------------------------------------------------

/// Render the concert-type multi-select.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("Filter by Concert Type").color(theme::ACCENT));
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Options come from the full dataset, not the filtered view.
    let types = dataset.concert_types.clone();

    ui.horizontal(|ui: &mut Ui| {
        let summary = if state.selection.is_empty() {
            "Showing all types".to_string()
        } else {
            format!("{}/{} selected", state.selection.len(), types.len())
        };
        ui.label(RichText::new(summary).weak());
        if ui
            .add_enabled(!state.selection.is_empty(), egui::Button::new("Clear").small())
            .clicked()
        {
            state.clear_selection();
        }
    });
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for concert_type in &types {
                let label = if concert_type.is_empty() {
                    "(none)"
                } else {
                    concert_type.as_str()
                };
                let selected = state.selection.contains(concert_type);
                if ui.selectable_label(selected, label).clicked() {
                    state.toggle_type(concert_type);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Right side panel – distinct artists
// ---------------------------------------------------------------------------

/// Render the list of artists in the current view.
pub fn artist_panel(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("Artists/Musicals seen:").color(theme::ACCENT));
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                for artist in &state.view.artists {
                    ui.label(RichText::new(artist).size(18.0));
                }
            });
        });
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

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} concerts loaded, {} shown",
                ds.len(),
                state.view.len()
            ));
            if let Some(src) = &ds.source {
                ui.label(RichText::new(src.display().to_string()).weak());
            }
        }

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
        .set_title("Open concert table")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Replace the dataset with `path`; on failure keep the current one.
pub fn load_into(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} concerts ({} rows dropped) with types {:?}",
                dataset.len(),
                dataset.dropped_rows,
                dataset.concert_types
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.report_error(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn failed_load_keeps_current_dataset() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Date,Band/Artist,Location,Concert Type,Additional Info on Setlist").unwrap();
        writeln!(file, "2020-01-01,Hamilton,NYC Theater,Musical,").unwrap();

        let mut state = AppState::default();
        load_into(&mut state, file.path());
        assert_eq!(state.view.len(), 1);

        let dir = tempfile::tempdir().unwrap();
        load_into(&mut state, &dir.path().join("missing.csv"));
        assert_eq!(state.view.len(), 1);
        assert!(state.status_message.as_deref().unwrap_or("").starts_with("Error:"));
    }
}
