/// Data layer: core types, loading, filtering and view projections.
///
/// Architecture:
/// ```text
///  concerts.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, drop bad dates, region + setlist → ConcertDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ConcertDataset │  Vec<ConcertRecord> sorted by (region, location)
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selected concert types → filtered records
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ projection │  timeline points + distinct artists
///   └────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod projection;
pub mod region;
pub mod setlist;
