//! Error types for prazo-rs.
//!
//! The deadline engine itself is total over well-formed dates and holiday
//! records; errors only arise at the construction boundary, when a caller
//! builds a `Date` from raw components or parses one from an ISO string.

use thiserror::Error;

/// The top-level error type used throughout prazo-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic produced an out-of-range result.
    #[error("date error: {0}")]
    Date(String),

    /// An ISO-8601 date string could not be parsed.
    #[error("cannot parse date {input:?}: {reason}")]
    DateParse {
        /// The string that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Shorthand `Result` type used throughout prazo-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
