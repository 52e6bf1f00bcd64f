use eframe::egui;

use crate::state::AppState;
use crate::theme;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ConcertsApp {
    pub state: AppState,
}

impl ConcertsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        theme::apply(&cc.egui_ctx);
        Self { state }
    }
}

impl eframe::App for ConcertsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: concert type filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::filter_panel(ui, &mut self.state);
            });

        // ---- Right side panel: artists ----
        egui::SidePanel::right("artist_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::artist_panel(ui, &self.state);
            });

        // ---- Central panel: timeline ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new(theme::WINDOW_TITLE)
                        .size(28.0)
                        .color(theme::ACCENT),
                );
            });
            ui.add_space(6.0);
            plot::timeline_plot(ui, &mut self.state);
        });
    }
}
