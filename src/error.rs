use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the transformation pipeline, one variant per step.
///
/// Callers that embed the engine can branch on the step that failed
/// instead of parsing report prose; the command layer folds every variant
/// into the single textual error report.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Creating the parent directories or the initial empty file failed.
    #[error("failed to create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or decoding the file content failed.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The search pattern is not a valid regular expression.
    #[error("invalid regex pattern: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Writing the substituted content back failed.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
