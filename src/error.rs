use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the survey pipeline.
///
/// `SourceUnavailable` and `SchemaMismatch` are fatal at load time and are
/// never retried. `UnknownLabel` is a caller error on a query.
/// `InsufficientData` only surfaces when a single correlation pair is asked
/// for directly; matrix construction turns it into a NaN cell instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("survey source {} is unavailable: {}", .path.display(), .reason)]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("no catalog question columns in source ({column_count} columns present)")]
    SchemaMismatch { column_count: usize },

    #[error("unknown question label: {label:?}")]
    UnknownLabel { label: String },

    #[error("{observed} paired observations for {first} vs {second}, need at least 2")]
    InsufficientData {
        first: String,
        second: String,
        observed: usize,
    },
}

/// Result alias used throughout the library.
pub type SurveyResult<T> = Result<T, SurveyError>;
