//! Road classification for butterfly-osm guidance
//!
//! Derives a one-byte [`RoadClassification`] from the `highway` tag of a way
//! and decides whether two roads are close enough in importance to be seen
//! as a fork.
//!
//! ```
//! use butterfly_guidance::{can_be_seen_as_fork, RoadClassification};
//!
//! let ramp = RoadClassification::from_tags(&[("highway", "motorway_link")]);
//! assert!(ramp.is_ramp_class());
//! assert_eq!(ramp.to_string(), "motorway_link important10");
//!
//! let trunk = RoadClassification::from_highway("trunk");
//! assert!(!can_be_seen_as_fork(ramp, trunk));
//! ```

pub mod classification;
pub mod data;
pub mod fork;
pub mod highway;
pub mod tags;

pub use butterfly_common::{Error, Result};
pub use classification::{RoadClassification, MAX_PRIORITY};
pub use data::RoadClassificationData;
pub use fork::can_be_seen_as_fork;
pub use highway::FALLBACK_PRIORITY;
pub use tags::{TagLookup, TagSource};
