use std::collections::{HashMap, HashSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: venue label → Color32
// ---------------------------------------------------------------------------

/// Maps venue labels to distinct colours, in the order the venues were given.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: HashMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map for the given venues (duplicates are ignored).
    pub fn new<'a>(venues: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let ordered: Vec<&str> = venues.into_iter().filter(|v| seen.insert(*v)).collect();
        let palette = generate_palette(ordered.len());
        let mapping = ordered
            .into_iter()
            .zip(palette)
            .map(|(v, c)| (v.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a venue; unknown venues are grey.
    pub fn color_for(&self, venue: &str) -> Color32 {
        self.mapping.get(venue).copied().unwrap_or(Color32::GRAY)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }
}
