use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use super::filter::{TypeSelection, filter_by_type};
use super::model::{ConcertDataset, ConcertRecord, Region};

// ---------------------------------------------------------------------------
// Timeline projection
// ---------------------------------------------------------------------------

/// Composite label used to group and colour timeline points.
pub fn venue_label(region: Region, location: &str) -> String {
    format!("{region}: {location}")
}

/// One scatter point of the timeline (one per record, duplicates kept).
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub artist: String,
    /// Category row of `artist` on the y axis (first-occurrence order).
    pub row: usize,
    pub venue: String,
    pub location: String,
    pub setlist_info: String,
}

impl TimelinePoint {
    /// X coordinate: days since the common era.
    pub fn x(&self) -> f64 {
        self.date.num_days_from_ce() as f64
    }

    /// Y coordinate: the artist's category row.
    pub fn y(&self) -> f64 {
        self.row as f64
    }
}

/// Project records onto timeline points.
pub fn timeline(records: &[&ConcertRecord]) -> Vec<TimelinePoint> {
    let mut rows: HashMap<&str, usize> = HashMap::new();
    records
        .iter()
        .map(|rec| {
            let next = rows.len();
            let row = *rows.entry(rec.artist.as_str()).or_insert(next);
            TimelinePoint {
                date: rec.date,
                artist: rec.artist.clone(),
                row,
                venue: venue_label(rec.region, &rec.location),
                location: rec.location.clone(),
                setlist_info: rec.setlist_info.clone(),
            }
        })
        .collect()
}

/// Group points by venue, groups in first-occurrence order.
pub fn venue_groups(points: &[TimelinePoint]) -> Vec<(String, Vec<&TimelinePoint>)> {
    let mut groups: Vec<(String, Vec<&TimelinePoint>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for p in points {
        match index.get(p.venue.as_str()) {
            Some(&i) => groups[i].1.push(p),
            None => {
                index.insert(p.venue.as_str(), groups.len());
                groups.push((p.venue.clone(), vec![p]));
            }
        }
    }
    groups
}

/// Tooltip text for a point.
pub fn hover_text(point: &TimelinePoint) -> String {
    format!(
        "Artist/Show: {}\nDate: {}\nLocation: {}\nSetlist Info: {}",
        point.artist,
        point.date.format("%m-%Y"),
        point.location,
        point.setlist_info
    )
}

// ---------------------------------------------------------------------------
// Distinct-performers projection
// ---------------------------------------------------------------------------

/// Unique artist names, first-occurrence order.
pub fn distinct_artists(records: &[&ConcertRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .filter(|rec| seen.insert(rec.artist.as_str()))
        .map(|rec| rec.artist.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// FilteredView – both projections for one selection
// ---------------------------------------------------------------------------

/// Everything the renderer needs for the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    pub timeline: Vec<TimelinePoint>,
    pub artists: Vec<String>,
}

impl FilteredView {
    /// Recompute both projections from the immutable dataset.
    pub fn compute(dataset: &ConcertDataset, selection: &TypeSelection) -> Self {
        let filtered = filter_by_type(&dataset.records, selection);
        FilteredView {
            timeline: timeline(&filtered),
            artists: distinct_artists(&filtered),
        }
    }

    /// Number of concerts shown.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv_reader;

    fn rec(date: (i32, u32, u32), artist: &str, location: &str, region: Region) -> ConcertRecord {
        ConcertRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            artist: artist.into(),
            location: location.into(),
            concert_type: "Concert".into(),
            setlist_info: "Tweezer,\nHarry Hood".into(),
            region,
        }
    }

    fn dataset() -> ConcertDataset {
        let csv = "Date,Band/Artist,Location,Concert Type,Additional Info on Setlist\n\
                   2020-01-01,Hamilton,NYC Theater,Musical,Act I;Act II\n\
                   2021-05-01,Phish,Madison Square,Concert,\n\
                   2019-03-01,Test,???,Concert,A:;B\n\
                   not-a-date,Ghost,Chicago,Concert,\n";
        load_csv_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn venue_label_joins_region_and_location() {
        assert_eq!(venue_label(Region::NewYork, "NYC Theater"), "New York: NYC Theater");
        assert_eq!(venue_label(Region::Illinois, ""), "Illinois: ");
    }

    #[test]
    fn timeline_keeps_duplicates_and_assigns_rows() {
        let a = rec((2020, 1, 1), "Phish", "Madison", Region::Wisconsin);
        let b = rec((2020, 1, 2), "Goose", "SF", Region::California);
        let records = vec![&a, &b, &a];
        let points = timeline(&records);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], points[2]);
        assert_eq!(points.iter().map(|p| p.row).collect::<Vec<_>>(), vec![0, 1, 0]);
        assert_eq!(points[1].venue, "California: SF");
        assert_eq!(points[1].x() - points[0].x(), 1.0);
    }

    #[test]
    fn venue_groups_follow_first_occurrence() {
        let a = rec((2020, 1, 1), "Phish", "Madison", Region::Wisconsin);
        let b = rec((2020, 1, 2), "Goose", "SF", Region::California);
        let c = rec((2020, 1, 3), "Goose", "Madison", Region::Wisconsin);
        let points = timeline(&[&a, &b, &c]);
        let groups = venue_groups(&points);
        let names: Vec<&str> = groups.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(names, vec!["Wisconsin: Madison", "California: SF"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1.len(), 1);
    }

    #[test]
    fn distinct_artists_dedupes_in_order() {
        let a = rec((2020, 1, 1), "Phish", "Madison", Region::Wisconsin);
        let b = rec((2020, 1, 2), "Goose", "SF", Region::California);
        let c = rec((2020, 1, 3), "Phish", "SF", Region::California);
        let records = vec![&a, &b, &c, &b];
        let artists = distinct_artists(&records);
        assert_eq!(artists, vec!["Phish", "Goose"]);
        assert!(artists.len() <= records.len());
    }

    #[test]
    fn hover_text_shows_month_and_setlist() {
        let a = rec((2021, 5, 1), "Phish", "Madison Square", Region::Wisconsin);
        let points = timeline(&[&a]);
        assert_eq!(
            hover_text(&points[0]),
            "Artist/Show: Phish\nDate: 05-2021\nLocation: Madison Square\nSetlist Info: Tweezer,\nHarry Hood"
        );
    }

    #[test]
    fn filtered_view_for_all_and_for_concerts() {
        let ds = dataset();

        let all = FilteredView::compute(&ds, &TypeSelection::new());
        assert_eq!(all.len(), 3);
        assert_eq!(all.artists, vec!["Test", "Hamilton", "Phish"]);

        let concerts: TypeSelection = ["Concert".to_string()].into_iter().collect();
        let view = FilteredView::compute(&ds, &concerts);
        assert_eq!(view.len(), 2);
        assert_eq!(view.artists, vec!["Test", "Phish"]);
        let venues: Vec<&str> = view.timeline.iter().map(|p| p.venue.as_str()).collect();
        assert_eq!(venues, vec!["Illinois: ???", "Wisconsin: Madison Square"]);

        let none: TypeSelection = ["Opera".to_string()].into_iter().collect();
        assert!(FilteredView::compute(&ds, &none).is_empty());
    }
}
