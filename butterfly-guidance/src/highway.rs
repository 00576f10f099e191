//! Highway type vocabulary and road priorities
//!
//! The set of recognised `highway=*` values is closed. Each one maps to a
//! priority rank where lower means more important.

use std::collections::HashMap;
use std::sync::OnceLock;

use butterfly_common::suggest_correction;

/// Priority for any highway value not in the table (including a missing tag)
pub const FALLBACK_PRIORITY: u8 = 14;

/// Highway type → priority, in table order
const PRIORITY_TABLE: &[(&str, u8)] = &[
    ("motorway", 0),
    ("motorway_link", 10),
    ("trunk", 2),
    ("trunk_link", 10),
    ("primary", 4),
    ("primary_link", 10),
    ("secondary", 6),
    ("secondary_link", 10),
    ("tertiary", 8),
    ("tertiary_link", 10),
    ("unclassified", 10),
    ("residential", 11),
    ("service", 12),
    ("living_street", 10),
    ("track", 14),
    ("road", 14),
    ("path", 14),
    ("driveway", 14),
];

static PRIORITY_INDEX: OnceLock<HashMap<&'static str, u8>> = OnceLock::new();

fn priority_index() -> &'static HashMap<&'static str, u8> {
    PRIORITY_INDEX.get_or_init(|| PRIORITY_TABLE.iter().copied().collect())
}

/// Priority of a highway type, `None` if the type is not in the table
pub fn priority_of(highway: &str) -> Option<u8> {
    priority_index().get(highway).copied()
}

/// All highway types with a table priority, in table order
pub fn priority_table() -> &'static [(&'static str, u8)] {
    PRIORITY_TABLE
}

/// All recognised highway types, in table order
pub fn known_highway_types() -> impl Iterator<Item = &'static str> + Clone {
    PRIORITY_TABLE.iter().map(|(name, _)| *name)
}

/// Check if a highway value is part of the recognised vocabulary
pub fn is_known_highway_type(highway: &str) -> bool {
    priority_index().contains_key(highway)
}

/// Suggest the closest recognised highway type for an unknown value
///
/// Returns `None` for recognised values and for values that resemble
/// nothing in the vocabulary. Wrongly cased values (`Motorway`) do not
/// classify, so they get a suggestion too.
pub fn suggest_highway_type(highway: &str) -> Option<&'static str> {
    suggest_correction(highway, known_highway_types())
}

/// Ways that behave like a motorway (physically separated directions)
pub(crate) fn is_motorway_like(highway: &str) -> bool {
    matches!(highway, "motorway" | "trunk" | "motorway_link" | "trunk_link")
}

/// Connector/ramp variants
pub(crate) fn is_link(highway: &str) -> bool {
    matches!(
        highway,
        "motorway_link" | "trunk_link" | "primary_link" | "secondary_link" | "tertiary_link"
    )
}

/// Pure connectivity ways, irrelevant to branching decisions
pub(crate) fn may_be_ignored(highway: &str) -> bool {
    matches!(highway, "service" | "track" | "road" | "path" | "driveway")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_of_table_entries() {
        assert_eq!(priority_of("motorway"), Some(0));
        assert_eq!(priority_of("trunk"), Some(2));
        assert_eq!(priority_of("primary"), Some(4));
        assert_eq!(priority_of("secondary"), Some(6));
        assert_eq!(priority_of("tertiary"), Some(8));
        assert_eq!(priority_of("tertiary_link"), Some(10));
        assert_eq!(priority_of("residential"), Some(11));
        assert_eq!(priority_of("service"), Some(12));
        assert_eq!(priority_of("driveway"), Some(14));
    }

    #[test]
    fn test_priority_of_unknown() {
        assert_eq!(priority_of(""), None);
        assert_eq!(priority_of("footway"), None);
        assert_eq!(priority_of("Motorway"), None);
    }

    #[test]
    fn test_table_priorities_fit_five_bits() {
        assert!(PRIORITY_TABLE.iter().all(|(_, p)| *p <= 31));
        assert!(FALLBACK_PRIORITY <= 31);
    }

    #[test]
    fn test_known_highway_types_order() {
        let types: Vec<_> = known_highway_types().collect();
        assert_eq!(types.len(), 18);
        assert_eq!(types.first(), Some(&"motorway"));
        assert_eq!(types.last(), Some(&"driveway"));
    }

    #[test]
    fn test_suggest_highway_type() {
        assert_eq!(suggest_highway_type("motorway"), None);
        assert_eq!(suggest_highway_type("motorwya"), Some("motorway"));
        assert_eq!(suggest_highway_type("residental"), Some("residential"));
        assert_eq!(suggest_highway_type("xyzzy"), None);
    }

    #[test]
    fn test_suggest_highway_type_wrong_case() {
        assert_eq!(priority_of("Motorway"), None);
        assert_eq!(suggest_highway_type("Motorway"), Some("motorway"));
        assert_eq!(suggest_highway_type("RESIDENTIAL"), Some("residential"));
    }

    #[test]
    fn test_membership_sets_are_independent() {
        // motorway_link sits in both boolean sets and the table
        assert!(is_motorway_like("motorway_link"));
        assert!(is_link("motorway_link"));
        assert!(!may_be_ignored("motorway_link"));

        // living_street has a priority but no boolean class
        assert!(!is_motorway_like("living_street"));
        assert!(!is_link("living_street"));
        assert!(!may_be_ignored("living_street"));
    }
}
