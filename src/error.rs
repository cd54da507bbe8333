use std::{io, path::PathBuf};

use thiserror::Error;

use crate::record::LogRecord;

/// Errors produced by [`Logger`](crate::Logger) construction and logging calls.
///
/// Failed logging calls carry the [`LogRecord`] they built, so the intended
/// content survives even when persistence did not.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The target path could not be created or opened at construction time.
    #[error("log storage unavailable at `{}`: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An append failed after construction had succeeded. Nothing is retried
    /// or buffered; the record is lost from the file but not from memory.
    #[error("failed to append record to `{}`: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        record: LogRecord,
        #[source]
        source: io::Error,
    },

    /// The record reached the file but could not be mirrored to stdout.
    #[error("failed to mirror record to console: {source}")]
    ConsoleFailure {
        record: LogRecord,
        #[source]
        source: io::Error,
    },
}

impl LoggerError {
    /// The record the failed call had built, if the call got that far.
    pub fn record(&self) -> Option<&LogRecord> {
        match self {
            LoggerError::StorageUnavailable { .. } => None,
            LoggerError::WriteFailure { record, .. }
            | LoggerError::ConsoleFailure { record, .. } => Some(record),
        }
    }

    pub fn into_record(self) -> Option<LogRecord> {
        match self {
            LoggerError::StorageUnavailable { .. } => None,
            LoggerError::WriteFailure { record, .. }
            | LoggerError::ConsoleFailure { record, .. } => Some(record),
        }
    }
}
