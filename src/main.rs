mod app;
mod color;
mod data;
mod state;
mod theme;
mod ui;

use std::path::Path;

use anyhow::{Context, anyhow};
use app::ConcertsApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The viewer has nothing to show without data, so a bad table is fatal.
    let path = Path::new(theme::DEFAULT_DATA_PATH);
    let dataset = data::loader::load_file(path)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", path.display()))
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} concerts ({} rows dropped) with types {:?}",
        dataset.len(),
        dataset.dropped_rows,
        dataset.concert_types
    );
    let state = AppState::with_dataset(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::WINDOW_SIZE)
            .with_min_inner_size(theme::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        theme::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ConcertsApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("UI terminated: {e}"))
}
