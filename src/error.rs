//! Error types for loading and ranking loadouts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a loadout evaluation run.
///
/// Every variant is fatal: a run either completes over a consistent
/// inventory or produces no ranked output at all.
#[derive(Debug, Error)]
pub enum LoadoutError {
    /// The equipment file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The equipment file is not valid JSON, or not the expected shape.
    #[error("malformed equipment json: {0}")]
    Json(#[from] serde_json::Error),

    /// A category entry is not a list of item records.
    #[error("invalid category '{category}': {reason}")]
    InvalidCategory { category: String, reason: String },

    /// An item record is structurally invalid.
    #[error("invalid record #{index} in category '{category}': {reason}")]
    InvalidRecord {
        category: String,
        index: usize,
        reason: String,
    },

    /// An item's declared total disagrees with the sum of its stats.
    #[error("stats do not add up for {name} (power: {power}): declared {declared}, actual {actual}")]
    TotalMismatch {
        name: String,
        power: i64,
        declared: i64,
        actual: i64,
    },

    /// A stat component lies outside the accepted range.
    #[error("stat value {value} of {name} (power: {power}) exceeds the limit of ±{limit}")]
    StatOutOfRange {
        name: String,
        power: i64,
        value: i64,
        limit: i64,
    },

    /// The Cartesian product exceeds the configured cap.
    #[error("{count} combinations exceed the configured limit of {limit}")]
    TooManyCombinations { count: u128, limit: usize },
}

/// Result type for loadout operations.
pub type LoadoutResult<T> = Result<T, LoadoutError>;
