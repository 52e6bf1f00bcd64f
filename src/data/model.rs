use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Region – derived geographic label
// ---------------------------------------------------------------------------

/// Geographic bucket derived from a record's free-text location.
///
/// Variants are declared in the alphabetical order of their labels, so the
/// derived `Ord` sorts exactly like the label strings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    California,
    Illinois,
    Michigan,
    NewYork,
    Wisconsin,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::California => "California",
            Region::Illinois => "Illinois",
            Region::Michigan => "Michigan",
            Region::NewYork => "New York",
            Region::Wisconsin => "Wisconsin",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConcertRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single concert attended. Built once by the loader, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcertRecord {
    pub date: NaiveDate,
    /// Band, artist or musical.
    pub artist: String,
    /// Free-text venue / city.
    pub location: String,
    pub concert_type: String,
    /// Setlist notes, already reformatted for display (empty when absent).
    pub setlist_info: String,
    pub region: Region,
}

// ---------------------------------------------------------------------------
// ConcertDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalised dataset, sorted by `(region, location)`.
#[derive(Debug, Clone, Default)]
pub struct ConcertDataset {
    pub records: Vec<ConcertRecord>,
    /// Distinct concert types over the whole dataset, first-occurrence order.
    pub concert_types: Vec<String>,
    /// Rows discarded because their date could not be parsed.
    pub dropped_rows: usize,
    /// File the dataset was read from, if any.
    pub source: Option<PathBuf>,
}

impl ConcertDataset {
    /// Build the concert-type index from already sorted records.
    pub fn from_records(records: Vec<ConcertRecord>, dropped_rows: usize) -> Self {
        let concert_types: Vec<String> = {
            let mut seen: HashSet<&str> = HashSet::new();
            records
                .iter()
                .filter(|rec| seen.insert(rec.concert_type.as_str()))
                .map(|rec| rec.concert_type.clone())
                .collect()
        };
        ConcertDataset {
            records,
            concert_types,
            dropped_rows,
            source: None,
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Earliest and latest concert date.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Number of concerts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(concert_type: &str) -> ConcertRecord {
        ConcertRecord {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            artist: "Phish".into(),
            location: "Chicago".into(),
            concert_type: concert_type.into(),
            setlist_info: String::new(),
            region: Region::Illinois,
        }
    }

    #[test]
    fn region_order_matches_label_order() {
        let mut regions = vec![
            Region::Wisconsin,
            Region::NewYork,
            Region::Michigan,
            Region::Illinois,
            Region::California,
        ];
        regions.sort();
        let labels: Vec<&str> = regions.iter().map(|r| r.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn concert_types_keep_first_occurrence_order() {
        let ds = ConcertDataset::from_records(
            vec![record("Musical"), record("Concert"), record("Musical")],
            0,
        );
        assert_eq!(ds.concert_types, vec!["Musical", "Concert"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }

    #[test]
    fn date_span_covers_all_records() {
        let mut early = record("Concert");
        early.date = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
        let mut late = record("Concert");
        late.date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        let ds = ConcertDataset::from_records(vec![record("Musical"), late, early], 0);
        assert_eq!(
            ds.date_span(),
            Some((
                NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
            ))
        );
        assert_eq!(ConcertDataset::default().date_span(), None);
    }
}
