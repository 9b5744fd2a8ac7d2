//! Schedule parsing error types.

use crate::domain::TimeError;

/// What was wrong with a schedule line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedScheduleKind {
    /// A stop entry appeared before any line header
    #[error("stop entry before any line header")]
    EntryBeforeHeader,

    /// Header id is empty or contains a colon
    #[error("invalid line header: {0}")]
    InvalidHeader(&'static str),

    /// Entry has a time but no stop name in front of it
    #[error("stop entry has no stop name")]
    MissingStopName,

    /// Final token of an entry is not an HH:MM time
    #[error(transparent)]
    InvalidTime(#[from] TimeError),
}

/// A schedule line that could not be parsed.
///
/// Carries the 1-based line number and the trimmed text of the offending
/// line so the caller can point at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed schedule at line {line_number} ({line:?}): {kind}")]
pub struct MalformedScheduleError {
    pub line_number: usize,
    pub line: String,
    pub kind: MalformedScheduleKind,
}

impl MalformedScheduleError {
    pub(super) fn new(line_number: usize, line: &str, kind: MalformedScheduleKind) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            kind,
        }
    }
}
