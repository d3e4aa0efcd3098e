use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::query::ListQuery;
use crate::model::task::TaskTier;

const STATE_FILE: &str = "state.json";

/// Error type for state persistence
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("cannot write state: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode state: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot replace state file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Persisted tracker state, written to state.json next to the pack.
///
/// The completion map is ordered (completion order) so the file diffs
/// cleanly; everything else degrades to defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedState {
    /// Completed task ids with completion time
    #[serde(default)]
    pub completed: IndexMap<String, DateTime<Utc>>,
    /// Current rolled task, if any
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub ui: UiState,
}

/// Persisted UI state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiState {
    /// Active tier tab
    #[serde(default)]
    pub active_tier: Option<TaskTier>,
    /// Selected row index per tier
    #[serde(default)]
    pub selected_by_tier: HashMap<TaskTier, usize>,
    /// Query state (filters, sorts, scope) as last left
    #[serde(default)]
    pub query: ListQuery,
}

/// Read state.json from the given directory. Missing or malformed state
/// is not an error — the tracker starts fresh.
pub fn read_state(dir: &Path) -> Option<SavedState> {
    let content = fs::read_to_string(dir.join(STATE_FILE)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write state.json atomically (temp file + rename)
pub fn write_state(dir: &Path, state: &SavedState) -> Result<(), StateError> {
    let content = serde_json::to_string_pretty(state)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(dir.join(STATE_FILE))?;
    Ok(())
}
