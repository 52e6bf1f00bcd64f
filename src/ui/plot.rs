use chrono::NaiveDate;
use eframe::egui::{RichText, Slider, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotBounds, PlotPoint, Points};

use crate::data::projection::{hover_text, venue_groups};
use crate::state::AppState;
use crate::theme;

// ---------------------------------------------------------------------------
// Timeline plot (central panel)
// ---------------------------------------------------------------------------

pub const PLOT_TITLE: &str = "Timeline of Concerts Seen (hover over data points for info)";

/// Days of margin around the date window.
const WINDOW_PAD_DAYS: f64 = 15.0;

/// Render the concert timeline in the central panel.
pub fn timeline_plot(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a concert table to view the timeline  (File → Open…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(PLOT_TITLE).strong());
    });
    date_range_sliders(ui, state);
    let window_change = state.take_window_change();

    let points = &state.view.timeline;
    let groups = venue_groups(points);

    // The formatter outlives this frame's borrows, so it owns its lookup table.
    let tooltips: Vec<(String, f64, f64, String)> = points
        .iter()
        .map(|p| (p.venue.clone(), p.x(), p.y(), hover_text(p)))
        .collect();

    Plot::new("timeline_plot")
        .legend(Legend::default())
        .x_axis_label("Year (with range sliders)")
        .y_axis_label("Artist/Musical")
        .x_axis_formatter(|mark, _range| format_day(mark.value))
        .y_axis_formatter(|_mark, _range| String::new())
        .label_formatter(move |name, value| nearest_tooltip(&tooltips, name, value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some(w) = window_change {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [w.start - WINDOW_PAD_DAYS, -1.0],
                    [w.end + WINDOW_PAD_DAYS, state.view.artists.len() as f64],
                ));
            }
            for (venue, members) in &groups {
                let coords: Vec<[f64; 2]> = members.iter().map(|p| [p.x(), p.y()]).collect();
                let series = Points::new(coords)
                    .name(venue)
                    .color(state.color_map.color_for(venue))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(theme::MARKER_RADIUS);
                plot_ui.points(series);
            }
        });
}

/// From / to sliders over the dataset's date span.
fn date_range_sliders(ui: &mut Ui, state: &mut AppState) {
    let (Some(span), Some(window)) = (state.date_span, state.date_window) else {
        return;
    };
    let mut start = window.start;
    let mut end = window.end;

    ui.horizontal(|ui: &mut Ui| {
        let from = ui.add(
            Slider::new(&mut start, span.start..=span.end)
                .step_by(1.0)
                .custom_formatter(|v, _| format_day(v))
                .text("from"),
        );
        let to = ui.add(
            Slider::new(&mut end, span.start..=span.end)
                .step_by(1.0)
                .custom_formatter(|v, _| format_day(v))
                .text("to"),
        );
        if from.changed() || to.changed() {
            state.set_date_window(start, end);
        }
        if ui.small_button("Full range").clicked() {
            state.reset_date_window();
        }
    });
}

/// Axis label for a day-number coordinate, as `MM-YYYY`.
fn format_day(value: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
        .map(|d| d.format("%m-%Y").to_string())
        .unwrap_or_default()
}

/// Tooltip of the point in series `name` closest to `value`.
fn nearest_tooltip(tooltips: &[(String, f64, f64, String)], name: &str, value: &PlotPoint) -> String {
    if name.is_empty() {
        return String::new();
    }
    tooltips
        .iter()
        .filter(|(venue, ..)| venue == name)
        .min_by(|a, b| {
            let da = (a.1 - value.x).powi(2) + (a.2 - value.y).powi(2);
            let db = (b.1 - value.x).powi(2) + (b.2 - value.y).powi(2);
            da.total_cmp(&db)
        })
        .map(|(.., text)| text.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn day_axis_uses_month_year() {
        let day = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
        assert_eq!(format_day(day.num_days_from_ce() as f64), "05-2021");
        assert_eq!(format_day(f64::from(i32::MAX) * 4.0), "");
    }

    #[test]
    fn tooltip_picks_closest_point_in_series() {
        let tooltips = vec![
            ("A".to_string(), 10.0, 0.0, "first".to_string()),
            ("A".to_string(), 20.0, 1.0, "second".to_string()),
            ("B".to_string(), 20.0, 1.0, "other".to_string()),
        ];
        assert_eq!(nearest_tooltip(&tooltips, "A", &PlotPoint::new(19.0, 1.0)), "second");
        assert_eq!(nearest_tooltip(&tooltips, "B", &PlotPoint::new(10.0, 0.0)), "other");
        assert_eq!(nearest_tooltip(&tooltips, "", &PlotPoint::new(10.0, 0.0)), "");
    }
}
