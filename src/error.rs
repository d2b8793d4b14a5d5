//! Domain errors for outline operations
//!
//! Every structural operation validates before emitting edits, so any error
//! here means the document was left untouched.

use thiserror::Error;

/// Failure modes of heading-relative operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrgError {
    /// The cursor is not at or below any heading line.
    #[error("no heading found at or before the cursor")]
    NoHeadingFound,

    /// A promote/demote would take a heading below level 1.
    #[error("heading level cannot drop below 1")]
    InvalidLevel,

    /// Clock or timestamp text could not be parsed.
    #[error("malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// A clock operation found no matching entry under the current heading.
    #[error("no clock entry under the current heading")]
    NoClockEntry,
}
