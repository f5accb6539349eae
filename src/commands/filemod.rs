use anyhow::Result;
use serde_json::from_str;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::state::SharedState;
use crate::core::types::FileMod;
use crate::transform::{self, TransformOutcome};

/// Apply a file transformation described by a JSON argument bundle.
///
/// Returns an error only when the bundle itself is malformed; every
/// transformation failure is rendered into the report string.
pub async fn file_mod(state: &SharedState, json_str: &str) -> Result<String> {
    debug!("file_mod request: {}", json_str);

    let request: FileMod = from_str(json_str)?;
    Ok(file_mod_internal(state, &request).await)
}

/// Run the transformation for an already-parsed request and render the
/// status report.
///
/// Reports quote the path exactly as the caller supplied it; resolution
/// against the workspace only affects where the file lives on disk.
pub async fn file_mod_internal(state: &SharedState, request: &FileMod) -> String {
    let (path, encoding) = {
        let state_guard = state.lock().unwrap();

        let resolved = if Path::new(&request.file_path).is_absolute() {
            PathBuf::from(&request.file_path)
        } else {
            state_guard.workspace_path.join(&request.file_path)
        };

        (resolved, state_guard.encoding)
    };

    match transform::transform(&path, &request.regex_target, &request.replacement, encoding).await
    {
        Ok(TransformOutcome::Replaced { count }) => {
            info!(
                "file_mod made {} replacement(s) in {}",
                count,
                path.display()
            );
            format!(
                "File mod completed successfully on '{}'. {} replacement(s) were made.",
                request.file_path, count
            )
        }
        Ok(TransformOutcome::NoMatch) => {
            warn!(
                "file_mod: pattern {:?} matched nothing in {}",
                request.regex_target,
                path.display()
            );
            format!(
                "Warning: Regex '{}' did not match in file '{}'. No replacements were made.",
                request.regex_target, request.file_path
            )
        }
        Err(err) => {
            warn!("file_mod failed: {}", err);
            format!("Error during reverse search and replace: {}", err)
        }
    }
}
