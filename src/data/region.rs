use super::model::Region;

/// Substring rules checked in order; the first rule with a matching needle wins.
const RULES: &[(&[&str], Region)] = &[
    (&["NYC", "New York"], Region::NewYork),
    (&["Madison"], Region::Wisconsin),
    (&["SF", "Stanford", "Berkeley", "San"], Region::California),
    (&["Grand Rapids", "Lansing"], Region::Michigan),
];

/// Anything no rule recognises lands here.
pub const FALLBACK_REGION: Region = Region::Illinois;

/// Derive the region of a free-text location (case-sensitive substring match).
pub fn region_for(location: &str) -> Region {
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| location.contains(n)))
        .map(|(_, region)| *region)
        .unwrap_or(FALLBACK_REGION)
}
