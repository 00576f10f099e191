//! Error types for the butterfly-osm toolkit
//!
//! Classification itself never fails; these variants cover the explicit
//! constructors, tag parsing and output formatting around it.

use thiserror::Error;

/// Main error type for butterfly-osm operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Road priority does not fit the 5-bit priority field
    #[error("Road priority {priority} out of range (maximum is {max})")]
    PriorityOutOfRange { priority: u32, max: u8 },

    /// Tag could not be parsed as `key=value`
    #[error("Invalid tag '{0}': expected key=value")]
    InvalidTag(String),

    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience result type for butterfly-osm operations
pub type Result<T> = std::result::Result<T, Error>;
