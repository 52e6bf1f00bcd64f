use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{ConcertDataset, ConcertRecord};
use super::region::region_for;
use super::setlist::format_setlist;

/// Column headers the input table must provide (matched exactly).
pub const DATE_COLUMN: &str = "Date";
pub const ARTIST_COLUMN: &str = "Band/Artist";
pub const LOCATION_COLUMN: &str = "Location";
pub const TYPE_COLUMN: &str = "Concert Type";
pub const SETLIST_COLUMN: &str = "Additional Info on Setlist";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    DATE_COLUMN,
    ARTIST_COLUMN,
    LOCATION_COLUMN,
    TYPE_COLUMN,
    SETLIST_COLUMN,
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level JSON array of records")]
    NotAnArray,
    #[error("JSON record {0} is not an object")]
    NotAnObject(usize),
    #[error("required column '{0}' is missing")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalise a concert table.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "Date": "...", "Band/Artist": "...", ... }, ...]`
/// * anything else is read as CSV with a header row
pub fn load_file(path: &Path) -> Result<ConcertDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "json" => load_json_reader(reader)?,
        _ => load_csv_reader(reader)?,
    };
    Ok(dataset.with_source(path))
}

// ---------------------------------------------------------------------------
// Raw rows and normalisation
// ---------------------------------------------------------------------------

/// One input row before validation. Every cell may be missing.
#[derive(Debug, Default, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: Option<String>,
    #[serde(rename = "Band/Artist")]
    artist: Option<String>,
    #[serde(rename = "Location")]
    location: Option<String>,
    #[serde(rename = "Concert Type")]
    concert_type: Option<String>,
    #[serde(rename = "Additional Info on Setlist")]
    setlist_info: Option<String>,
}

impl RawRow {
    /// `None` when the date does not parse; such rows are dropped.
    fn into_record(self) -> Option<ConcertRecord> {
        let date = parse_date(self.date.as_deref()?)?;
        let location = self.location.unwrap_or_default();
        Some(ConcertRecord {
            date,
            artist: self.artist.unwrap_or_default(),
            region: region_for(&location),
            location,
            concert_type: self.concert_type.unwrap_or_default(),
            setlist_info: format_setlist(self.setlist_info.as_deref()),
        })
    }
}

/// Turn raw rows into the sorted dataset, discarding rows with bad dates.
fn normalise(rows: Vec<RawRow>) -> ConcertDataset {
    let total = rows.len();
    let mut records: Vec<ConcertRecord> = rows.into_iter().filter_map(RawRow::into_record).collect();
    let dropped = total - records.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} of {total} rows with unparseable dates");
    }

    records.sort_by(|a, b| (a.region, &a.location).cmp(&(b.region, &b.location)));
    ConcertDataset::from_records(records, dropped)
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Full-date layouts, tried in order. Two-digit years come before four-digit
/// ones so that `1/5/20` is not read as the year 20.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date cell.  Month-only values map to the first of the month.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            let first_of = format!("1 {s}");
            ["%d %B %Y", "%d %b %Y"]
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&first_of, fmt).ok())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with (at least) the five required columns; any
/// other columns are ignored.  Short rows are accepted and their missing
/// trailing cells read as empty.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<ConcertDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col.to_string()));
        }
    }

    let rows = reader
        .deserialize::<RawRow>()
        .collect::<Result<Vec<_>, csv::Error>>()?;

    Ok(normalise(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (`df.to_json(orient='records')`).  A column counts as
/// present when at least one record carries the key.  Numeric dates are epoch
/// milliseconds, the pandas default for datetime columns.
pub fn load_json_reader<R: Read>(reader: R) -> Result<ConcertDataset, LoadError> {
    let root: JsonValue = serde_json::from_reader(reader)?;
    let items = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut objects = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        objects.push(item.as_object().ok_or(LoadError::NotAnObject(i))?);
    }

    for col in REQUIRED_COLUMNS {
        if !objects.iter().any(|obj| obj.contains_key(col)) {
            return Err(LoadError::MissingColumn(col.to_string()));
        }
    }

    let rows = objects
        .into_iter()
        .map(|obj| {
            let cell = |key: &str| obj.get(key).and_then(json_to_cell);
            RawRow {
                date: obj.get(DATE_COLUMN).and_then(json_to_date_cell),
                artist: cell(ARTIST_COLUMN),
                location: cell(LOCATION_COLUMN),
                concert_type: cell(TYPE_COLUMN),
                setlist_info: cell(SETLIST_COLUMN),
            }
        })
        .collect();

    Ok(normalise(rows))
}

/// Date cell as text; epoch-millisecond numbers become `%Y-%m-%d`.
fn json_to_date_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        }
        other => json_to_cell(other),
    }
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
