//! Per-way guidance data
//!
//! Currently only the road classification; further per-way attributes
//! needed for guidance generation belong here as well.

use serde::{Deserialize, Serialize};

use crate::classification::RoadClassification;
use crate::tags::TagSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoadClassificationData {
    pub road_classification: RoadClassification,
}

impl RoadClassificationData {
    pub fn from_tags<T: TagSource + ?Sized>(tags: &T) -> Self {
        Self {
            road_classification: RoadClassification::from_tags(tags),
        }
    }
}

impl From<RoadClassification> for RoadClassificationData {
    fn from(road_classification: RoadClassification) -> Self {
        Self {
            road_classification,
        }
    }
}

impl From<RoadClassificationData> for RoadClassification {
    fn from(data: RoadClassificationData) -> Self {
        data.road_classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wraps_default_classification() {
        let data = RoadClassificationData::default();
        assert_eq!(data.road_classification, RoadClassification::default());
    }

    #[test]
    fn test_from_tags() {
        let tags = [("highway", "secondary_link")];
        let data = RoadClassificationData::from_tags(&tags);
        assert_eq!(
            data.road_classification,
            RoadClassification::new(false, true, false, 10)
        );
    }

    #[test]
    fn test_equality_delegates_to_classification() {
        let a = RoadClassificationData::from_tags(&[("highway", "path")]);
        let b = RoadClassificationData::from(RoadClassification::new(false, false, true, 14));
        let c = RoadClassificationData::from_tags(&[("highway", "track"), ("name", "x")]);
        assert_eq!(a, b);
        // track and path classify identically
        assert_eq!(a, c);
        assert_ne!(a, RoadClassificationData::default());
    }

    #[test]
    fn test_serde_json() {
        let data = RoadClassificationData::from_tags(&[("highway", "motorway")]);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"{"road_classification":{"motorway_class":true,"link_class":false,"may_be_ignored":false,"priority":0}}"#
        );
        let back: RoadClassificationData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
