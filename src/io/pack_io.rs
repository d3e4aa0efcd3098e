use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::model::task::{Task, TaskSource, TaskTier};

/// Error type for task pack loading
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("cannot read pack file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid pack JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate task id: {0}")]
    DuplicateId(String),
    #[error("task at index {0} has an empty name")]
    UnnamedTask(usize),
}

/// A task entry as it appears in the pack file. Ids are optional there;
/// the loader synthesizes stable ones so completion keys never collide.
#[derive(Debug, Deserialize)]
struct RawTask {
    #[serde(default)]
    id: Option<String>,
    name: String,
    source: TaskSource,
    #[serde(default)]
    tier: Option<TaskTier>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    prereqs: Option<String>,
    #[serde(default)]
    wiki_url: Option<String>,
}

/// Load and validate a task pack from disk
pub fn load_pack(path: &Path) -> Result<Vec<Task>, PackError> {
    let content = fs::read_to_string(path).map_err(|source| PackError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_pack(&content)
}

/// Parse a task pack from JSON text
pub fn parse_pack(content: &str) -> Result<Vec<Task>, PackError> {
    let raw: Vec<RawTask> = serde_json::from_str(content)?;

    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut tasks = Vec::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        let name = entry.name.trim().to_string();
        if name.is_empty() {
            return Err(PackError::UnnamedTask(index));
        }

        let id = match entry.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => id.to_string(),
            None => stable_id(&name, entry.source, entry.tier),
        };
        if !seen.insert(id.clone()) {
            return Err(PackError::DuplicateId(id));
        }

        tasks.push(Task {
            id,
            name,
            source: entry.source,
            tier: entry.tier,
            description: trimmed(entry.description),
            prereqs: trimmed(entry.prereqs),
            wiki_url: trimmed(entry.wiki_url),
        });
    }
    Ok(tasks)
}

fn trimmed(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Deterministic fallback id for entries with no id. Stable across
/// restarts as long as the identifying fields stay the same.
fn stable_id(name: &str, source: TaskSource, tier: Option<TaskTier>) -> String {
    let payload = format!("name={name}|source={source:?}|tier={tier:?}");
    let digest = Sha256::digest(payload.as_bytes());
    let mut id = String::from("gen_");
    for byte in &digest[..8] {
        let _ = write!(id, "{byte:02x}");
    }
    id
}
