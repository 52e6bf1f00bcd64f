use eframe::egui::{self, Color32};

// ---------------------------------------------------------------------------
// Display configuration
// ---------------------------------------------------------------------------

/// Input table read at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "concerts.csv";

pub const WINDOW_TITLE: &str = "Concerts Seen";
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 820.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 420.0];

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x2e);
pub const TEXT: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf9);
pub const ACCENT: Color32 = Color32::from_rgb(0x4e, 0x79, 0xa7);

/// Scatter marker radius in points.
pub const MARKER_RADIUS: f32 = 6.0;

/// Install the dark palette on the context.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.override_text_color = Some(TEXT);
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}
