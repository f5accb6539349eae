use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::transform::TextEncoding;

/// Represents the current state of the filemod agent
#[derive(Debug, Clone)]
pub struct AgentState {
    /// Root against which relative request paths are resolved
    pub workspace_path: PathBuf,

    /// Decode policy for file reads
    pub encoding: TextEncoding,
}

impl AgentState {
    /// Create a new agent state rooted at the given workspace
    pub fn new(workspace_path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Self> {
        let workspace_path = workspace_path
            .as_ref()
            .canonicalize()
            .context("Failed to canonicalize workspace path")?;

        Ok(Self {
            workspace_path,
            encoding,
        })
    }
}

/// Thread-safe agent state container
pub type SharedState = Arc<Mutex<AgentState>>;

/// Create a new shared state
pub fn create_shared_state(
    workspace_path: impl AsRef<Path>,
    encoding: TextEncoding,
) -> Result<SharedState> {
    let state = AgentState::new(workspace_path, encoding)?;
    Ok(Arc::new(Mutex::new(state)))
}
