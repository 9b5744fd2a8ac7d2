//! Network compilation and persistence errors.

use std::path::PathBuf;

use crate::domain::LineId;
use crate::schedule::MalformedScheduleError;
use crate::stops::InvalidCoordinateError;

/// Errors from building, loading, saving or validating a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Schedule text could not be parsed
    #[error(transparent)]
    Schedule(#[from] MalformedScheduleError),

    /// Stop source has a bad position record
    #[error(transparent)]
    Coordinates(#[from] InvalidCoordinateError),

    /// Reading or writing a file failed
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line references a stop that has no coordinates
    #[error("line {line} references unknown stop {stop:?}")]
    UnknownStop { line: LineId, stop: String },
}

impl NetworkError {
    pub(super) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
