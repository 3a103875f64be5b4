//! Error types for the trip planner

use std::fmt;

use thiserror::Error;

/// Why an item attribute could not be used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFault {
    Missing,
    NotFinite,
}

impl fmt::Display for AttributeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeFault::Missing => f.write_str("missing"),
            AttributeFault::NotFinite => f.write_str("not a finite number"),
        }
    }
}

/// Main error type for planner operations.
///
/// Every variant is caused by a caller handing in bad input and is recoverable
/// by correcting that input.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A scoring attribute is absent or unusable on an item
    #[error("invalid item `{id}`: attribute `{key}` is {fault}")]
    InvalidItem {
        id: String,
        key: String,
        fault: AttributeFault,
    },

    /// A preference weight is NaN or infinite
    #[error("invalid weight `{key}`: {value} is not a finite number")]
    InvalidWeight { key: String, value: f64 },

    /// Insert collided with an existing identifier
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// Lookup of an identifier the collection does not hold
    #[error("unknown id: {0}")]
    UnknownId(String),

    /// Positional access outside `[0, len)`
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A form or document field that must be numeric was not
    #[error("field `{field}` expects {expected}, got {value:?}")]
    InvalidNumber {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("trip ends ({end}) before it starts ({start})")]
    InvalidDateRange { start: String, end: String },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
