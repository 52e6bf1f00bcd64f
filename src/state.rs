use chrono::Datelike;

use crate::color::ColorMap;
use crate::data::filter::TypeSelection;
use crate::data::model::ConcertDataset;
use crate::data::projection::FilteredView;

// ---------------------------------------------------------------------------
// Date window – visible x range of the timeline
// ---------------------------------------------------------------------------

/// An x range in day numbers (days since the common era), `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    pub start: f64,
    pub end: f64,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (immutable once set; replaced wholesale on File → Open).
    pub dataset: Option<ConcertDataset>,

    /// Selected concert types. Empty means "show all".
    pub selection: TypeSelection,

    /// Projections for the current selection (cached).
    pub view: FilteredView,

    /// Venue colours for the current view.
    pub color_map: ColorMap,

    /// Full date extent of the dataset.
    pub date_span: Option<DateWindow>,

    /// Range chosen with the date sliders.
    pub date_window: Option<DateWindow>,

    /// Set when the plot must re-apply `date_window` on the next frame.
    window_changed: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_dataset(dataset: ConcertDataset) -> Self {
        let mut state = AppState::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset and reset the filter to "show all".
    pub fn set_dataset(&mut self, dataset: ConcertDataset) {
        self.date_span = dataset.date_span().map(|(first, last)| DateWindow {
            start: first.num_days_from_ce() as f64,
            end: last.num_days_from_ce() as f64,
        });
        self.date_window = self.date_span;
        self.dataset = Some(dataset);
        self.selection.clear();
        self.status_message = None;
        self.on_selection_changed();
    }

    /// Filter control change handler: recompute both projections and colours.
    pub fn on_selection_changed(&mut self) {
        let Some(ds) = &self.dataset else {
            self.view = FilteredView::default();
            self.color_map = ColorMap::default();
            return;
        };
        self.view = FilteredView::compute(ds, &self.selection);
        self.color_map = ColorMap::new(self.view.timeline.iter().map(|p| p.venue.as_str()));
        // The artist rows changed, so the plot bounds need refitting.
        self.window_changed = true;
    }

    /// Set the visible date range, clamped to the dataset's span.
    pub fn set_date_window(&mut self, start: f64, end: f64) {
        let Some(span) = self.date_span else {
            return;
        };
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        self.date_window = Some(DateWindow {
            start: lo.clamp(span.start, span.end),
            end: hi.clamp(span.start, span.end),
        });
        self.window_changed = true;
    }

    /// Back to the dataset's full date span.
    pub fn reset_date_window(&mut self) {
        self.date_window = self.date_span;
        self.window_changed = true;
    }

    /// The window to apply to the plot, once per change.
    pub fn take_window_change(&mut self) -> Option<DateWindow> {
        if !std::mem::take(&mut self.window_changed) {
            return None;
        }
        self.date_window
    }

    /// Toggle a single concert type in the selection.
    pub fn toggle_type(&mut self, concert_type: &str) {
        if !self.selection.remove(concert_type) {
            self.selection.insert(concert_type.to_string());
        }
        self.on_selection_changed();
    }

    /// Drop every selected type (back to "show all").
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.on_selection_changed();
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_reader;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let csv = "Date,Band/Artist,Location,Concert Type,Additional Info on Setlist\n\
                   2020-01-01,Hamilton,NYC Theater,Musical,Act I;Act II\n\
                   2021-05-01,Phish,Madison Square,Concert,\n\
                   2019-03-01,Test,???,Concert,A:;B\n\
                   2022-07-01,Phish,SF Chase Center,Concert,\n";
        AppState::with_dataset(load_csv_reader(csv.as_bytes()).unwrap())
    }

    #[test]
    fn starts_with_everything_visible() {
        let st = state();
        assert!(st.selection.is_empty());
        assert_eq!(st.view.len(), 4);
        assert_eq!(st.view.artists.len(), 3);
        assert_eq!(st.color_map.len(), 4);
    }

    #[test]
    fn toggling_recomputes_both_projections() {
        let mut st = state();
        st.toggle_type("Musical");
        assert_eq!(st.view.len(), 1);
        assert_eq!(st.view.artists, vec!["Hamilton"]);
        assert_eq!(st.color_map.len(), 1);

        st.toggle_type("Concert");
        assert_eq!(st.view.len(), 4);

        st.toggle_type("Musical");
        assert_eq!(st.view.len(), 3);
        assert_eq!(st.view.artists, vec!["Phish", "Test"]);
    }

    #[test]
    fn clearing_shows_all_again() {
        let mut st = state();
        st.toggle_type("Concert");
        st.clear_selection();
        assert_eq!(st.view.len(), 4);
    }

    #[test]
    fn new_dataset_resets_selection_and_status() {
        let mut st = state();
        st.toggle_type("Concert");
        st.report_error("boom");
        st.set_dataset(ConcertDataset::default());
        assert!(st.selection.is_empty());
        assert!(st.status_message.is_none());
        assert!(st.view.is_empty());
    }

    #[test]
    fn date_window_starts_at_full_span() {
        let mut st = state();
        let span = st.date_span.unwrap();
        assert_eq!(
            span.start,
            NaiveDate::from_ymd_opt(2019, 3, 1).unwrap().num_days_from_ce() as f64
        );
        assert_eq!(
            span.end,
            NaiveDate::from_ymd_opt(2022, 7, 1).unwrap().num_days_from_ce() as f64
        );
        assert_eq!(st.take_window_change(), Some(span));
        assert_eq!(st.take_window_change(), None);
    }

    #[test]
    fn date_window_is_ordered_and_clamped() {
        let mut st = state();
        let span = st.date_span.unwrap();
        st.set_date_window(span.end + 500.0, span.start + 10.0);
        let window = st.take_window_change().unwrap();
        assert_eq!(window, DateWindow { start: span.start + 10.0, end: span.end });

        st.reset_date_window();
        assert_eq!(st.take_window_change(), Some(span));
    }

    #[test]
    fn filter_change_requests_refit() {
        let mut st = state();
        st.take_window_change();
        st.toggle_type("Musical");
        assert_eq!(st.take_window_change(), st.date_span);
    }

    #[test]
    fn no_dataset_means_empty_view() {
        let mut st = AppState::default();
        st.toggle_type("Concert");
        assert!(st.view.is_empty());
        assert_eq!(st.color_map.len(), 0);
        st.set_date_window(1.0, 2.0);
        assert_eq!(st.date_window, None);
    }
}
