use std::collections::BTreeSet;

use super::model::ConcertRecord;

// ---------------------------------------------------------------------------
// Filter predicate: which concert types are selected
// ---------------------------------------------------------------------------

/// Selected concert-type labels. An empty set means "no filter" (show all).
pub type TypeSelection = BTreeSet<String>;

/// Return the records whose concert type is selected, in their original order.
///
/// A record passes when:
/// * the selection is empty → passes (no constraint)
/// * its `concert_type` is in the selection → passes
///
/// Labels that no record carries simply match nothing.
pub fn filter_by_type<'a>(
    records: &'a [ConcertRecord],
    selection: &TypeSelection,
) -> Vec<&'a ConcertRecord> {
    records
        .iter()
        .filter(|rec| selection.is_empty() || selection.contains(&rec.concert_type))
        .collect()
}
