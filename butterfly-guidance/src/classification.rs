//! Road classification - compact per-way class information for guidance
//!
//! A classification packs three flags and a 5-bit priority into one byte:
//!
//! ```text
//!   bit 0      motorway class (separated directions)
//!   bit 1      link class (ramps and other connectors)
//!   bit 2      may be ignored (pure connectivity ways)
//!   bits 3-7   priority, lower is more important
//! ```
//!
//! Two roads whose priorities differ by at most one are considered a fork
//! candidate; otherwise one of them is the obvious continuation.

use std::fmt;

use butterfly_common::{Error, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::highway::{self, FALLBACK_PRIORITY};
use crate::tags::{TagSource, HIGHWAY_KEY};

/// Bit positions inside the packed classification byte
pub mod class_bits {
    pub const MOTORWAY: u8 = 0;
    pub const LINK: u8 = 1;
    pub const MAY_BE_IGNORED: u8 = 2;
    pub const PRIORITY_SHIFT: u8 = 3; // bits 3-7 encode priority
}

/// Largest priority the 5-bit field can hold
pub const MAX_PRIORITY: u8 = 31;

const MOTORWAY_MASK: u8 = 1 << class_bits::MOTORWAY;
const LINK_MASK: u8 = 1 << class_bits::LINK;
const IGNORE_MASK: u8 = 1 << class_bits::MAY_BE_IGNORED;

/// Classification of a single road segment
///
/// The default value (no flags, priority 0) doubles as "unknown". Its
/// priority is the same as a motorway's, so compare the whole value
/// against `RoadClassification::default()` to detect it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ClassificationFields", into = "ClassificationFields")]
pub struct RoadClassification {
    bits: u8,
}

impl RoadClassification {
    /// Build a classification from explicit attributes.
    ///
    /// A priority above [`MAX_PRIORITY`] is clamped to it (with a warning)
    /// rather than truncated into the neighbouring bits. Use
    /// [`RoadClassification::try_new`] to reject it instead.
    pub fn new(
        motorway_class: bool,
        link_class: bool,
        may_be_ignored: bool,
        priority: u32,
    ) -> Self {
        let clamped = if priority > u32::from(MAX_PRIORITY) {
            warn!("Road priority {priority} exceeds {MAX_PRIORITY}, clamping");
            MAX_PRIORITY
        } else {
            priority as u8
        };
        Self::pack(motorway_class, link_class, may_be_ignored, clamped)
    }

    /// Build a classification from explicit attributes, rejecting
    /// priorities that do not fit the 5-bit field.
    pub fn try_new(
        motorway_class: bool,
        link_class: bool,
        may_be_ignored: bool,
        priority: u32,
    ) -> Result<Self> {
        let priority = u8::try_from(priority)
            .ok()
            .filter(|p| *p <= MAX_PRIORITY)
            .ok_or(Error::PriorityOutOfRange {
                priority,
                max: MAX_PRIORITY,
            })?;
        Ok(Self::pack(motorway_class, link_class, may_be_ignored, priority))
    }

    /// Classify a way from its tags. Only `highway` is consulted.
    pub fn from_tags<T: TagSource + ?Sized>(tags: &T) -> Self {
        Self::from_highway(tags.tag(HIGHWAY_KEY).unwrap_or(""))
    }

    /// Classify a way from its `highway` value.
    ///
    /// Unknown values (and the empty string) give no flags and the fallback
    /// priority.
    pub fn from_highway(highway: &str) -> Self {
        let priority = highway::priority_of(highway).unwrap_or(FALLBACK_PRIORITY);
        Self::pack(
            highway::is_motorway_like(highway),
            highway::is_link(highway),
            highway::may_be_ignored(highway),
            priority,
        )
    }

    fn pack(motorway_class: bool, link_class: bool, may_be_ignored: bool, priority: u8) -> Self {
        debug_assert!(priority <= MAX_PRIORITY);
        let mut bits = priority << class_bits::PRIORITY_SHIFT;
        if motorway_class {
            bits |= MOTORWAY_MASK;
        }
        if link_class {
            bits |= LINK_MASK;
        }
        if may_be_ignored {
            bits |= IGNORE_MASK;
        }
        Self { bits }
    }

    /// Raw packed byte
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Behaves like a motorway, ramps included
    pub fn motorway_class(&self) -> bool {
        self.bits & MOTORWAY_MASK != 0
    }

    pub fn link_class(&self) -> bool {
        self.bits & LINK_MASK != 0
    }

    pub fn may_be_ignored(&self) -> bool {
        self.bits & IGNORE_MASK != 0
    }

    pub fn priority(&self) -> u8 {
        self.bits >> class_bits::PRIORITY_SHIFT
    }

    /// Motorway proper (not a ramp)
    pub fn is_motorway_class(&self) -> bool {
        self.motorway_class() && !self.link_class()
    }

    /// Motorway or trunk ramp
    pub fn is_ramp_class(&self) -> bool {
        self.motorway_class() && self.link_class()
    }

    pub fn is_link_class(&self) -> bool {
        self.link_class()
    }

    pub fn is_low_priority_road_class(&self) -> bool {
        self.may_be_ignored()
    }

    /// See [`crate::fork::can_be_seen_as_fork`]
    pub fn can_be_seen_as_fork(&self, other: &RoadClassification) -> bool {
        crate::fork::can_be_seen_as_fork(*self, *other)
    }
}

impl fmt::Debug for RoadClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadClassification")
            .field("motorway_class", &self.motorway_class())
            .field("link_class", &self.link_class())
            .field("may_be_ignored", &self.may_be_ignored())
            .field("priority", &self.priority())
            .finish()
    }
}

/// Formats as `<motorway|normal>[_link]< ignorable| important><priority>`,
/// e.g. `motorway_link important10`.
impl fmt::Display for RoadClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            if self.motorway_class() { "motorway" } else { "normal" },
            if self.link_class() { "_link" } else { "" },
            if self.may_be_ignored() { " ignorable" } else { " important" },
            self.priority()
        )
    }
}

/// Unpacked serde representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ClassificationFields {
    motorway_class: bool,
    link_class: bool,
    may_be_ignored: bool,
    priority: u32,
}

impl TryFrom<ClassificationFields> for RoadClassification {
    type Error = Error;

    fn try_from(fields: ClassificationFields) -> Result<Self> {
        RoadClassification::try_new(
            fields.motorway_class,
            fields.link_class,
            fields.may_be_ignored,
            fields.priority,
        )
    }
}

impl From<RoadClassification> for ClassificationFields {
    fn from(class: RoadClassification) -> Self {
        Self {
            motorway_class: class.motorway_class(),
            link_class: class.link_class(),
            may_be_ignored: class.may_be_ignored(),
            priority: u32::from(class.priority()),
        }
    }
}
