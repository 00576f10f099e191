//! Fork detection between two road classes

use crate::classification::RoadClassification;

/// Check whether two roads are similar enough in importance to form a fork.
///
/// Priorities within one rank of each other count as comparable; any other
/// attribute is irrelevant here.
pub fn can_be_seen_as_fork(first: RoadClassification, second: RoadClassification) -> bool {
    (i32::from(first.priority()) - i32::from(second.priority())).abs() <= 1
}
