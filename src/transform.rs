use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::TransformError;
use crate::utils::fs as fs_utils;

/// Decode policy applied when reading a target file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid bytes fail the read step.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

/// Outcome of a transformation that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The pattern matched and the file was rewritten.
    Replaced { count: usize },
    /// The pattern compiled but matched nothing; the file was left as-is.
    NoMatch,
}

/// Apply a regex search-and-replace across the entire content of `path`,
/// creating the file (and its parent directories) first when absent.
///
/// Matching is global and non-overlapping over the content as a single
/// string, so multi-line behavior is controlled by the pattern's own flags
/// such as `(?m)`. The replacement may reference capture groups as `$1` or
/// `${name}`; a literal dollar sign is written `$$`.
///
/// The file is rewritten only when at least one match occurred, via a
/// temporary file renamed over the target, so a failed call never leaves
/// partial content behind. No lock is held between the read and the write:
/// concurrent invocations on the same path race, and the last writer wins.
pub async fn transform(
    path: &Path,
    pattern: &str,
    replacement: &str,
    encoding: TextEncoding,
) -> Result<TransformOutcome, TransformError> {
    fs_utils::ensure_file(path)
        .await
        .map_err(|source| TransformError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    let content = fs_utils::read_file(path, encoding)
        .await
        .map_err(|source| TransformError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let regex = Regex::new(pattern).map_err(|source| TransformError::Compile {
        pattern: pattern.to_string(),
        source,
    })?;

    let count = regex.find_iter(&content).count();
    if count == 0 {
        debug!("pattern {:?} matched nothing in {}", pattern, path.display());
        return Ok(TransformOutcome::NoMatch);
    }

    let new_content = regex.replace_all(&content, replacement);
    fs_utils::write_file(path, new_content.as_ref())
        .await
        .map_err(|source| TransformError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("replaced {} occurrence(s) in {}", count, path.display());
    Ok(TransformOutcome::Replaced { count })
}
