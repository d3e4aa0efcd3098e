use serde::{Deserialize, Serialize};

/// Difficulty tier of a task, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskTier {
    Easy,
    Medium,
    Hard,
    Elite,
    Master,
    Grandmaster,
}

impl TaskTier {
    /// All tiers in progression order
    pub const ALL: [TaskTier; 6] = [
        TaskTier::Easy,
        TaskTier::Medium,
        TaskTier::Hard,
        TaskTier::Elite,
        TaskTier::Master,
        TaskTier::Grandmaster,
    ];

    /// Ordinal rank (0 = easiest)
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskTier::Easy => "Easy",
            TaskTier::Medium => "Medium",
            TaskTier::Hard => "Hard",
            TaskTier::Elite => "Elite",
            TaskTier::Master => "Master",
            TaskTier::Grandmaster => "Grandmaster",
        }
    }

    /// Next tier tab, wrapping past the last
    pub fn next(self) -> TaskTier {
        let i = (self.rank() as usize + 1) % Self::ALL.len();
        Self::ALL[i]
    }

    /// Previous tier tab, wrapping past the first
    pub fn prev(self) -> TaskTier {
        let i = (self.rank() as usize + Self::ALL.len() - 1) % Self::ALL.len();
        Self::ALL[i]
    }
}

/// Where a task comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskSource {
    #[serde(rename = "ca")]
    CombatAchievement,
    #[serde(rename = "clog")]
    CollectionLog,
}

impl TaskSource {
    /// Short badge shown in list rows
    pub fn badge(self) -> &'static str {
        match self {
            TaskSource::CombatAchievement => "CA",
            TaskSource::CollectionLog => "Clog",
        }
    }
}

/// A single task from a task pack.
///
/// Tasks are created once at pack load and never mutated; everything
/// downstream filters, reorders, or reads them by reference. Completion
/// lives in the persisted state keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id (synthesized by the pack loader if the pack omits one)
    pub id: String,
    pub name: String,
    pub source: TaskSource,
    #[serde(default)]
    pub tier: Option<TaskTier>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prereqs: Option<String>,
    #[serde(default)]
    pub wiki_url: Option<String>,
}

impl Task {
    /// Create a task with just the identifying fields (tests, mostly)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: TaskSource,
        tier: Option<TaskTier>,
    ) -> Self {
        Task {
            id: id.into(),
            name: name.into(),
            source,
            tier,
            description: None,
            prereqs: None,
            wiki_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_rank_follows_progression_order() {
        assert!(TaskTier::Easy.rank() < TaskTier::Medium.rank());
        assert!(TaskTier::Master.rank() < TaskTier::Grandmaster.rank());
    }

    #[test]
    fn tier_next_prev_wrap() {
        assert_eq!(TaskTier::Grandmaster.next(), TaskTier::Easy);
        assert_eq!(TaskTier::Easy.prev(), TaskTier::Grandmaster);
        assert_eq!(TaskTier::Hard.next(), TaskTier::Elite);
        assert_eq!(TaskTier::Elite.prev(), TaskTier::Hard);
    }

    #[test]
    fn tier_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TaskTier::Grandmaster).unwrap();
        assert_eq!(json, "\"grandmaster\"");
        let back: TaskTier = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(back, TaskTier::Easy);
    }

    #[test]
    fn source_serde_uses_short_names() {
        let json = serde_json::to_string(&TaskSource::CollectionLog).unwrap();
        assert_eq!(json, "\"clog\"");
        let back: TaskSource = serde_json::from_str("\"ca\"").unwrap();
        assert_eq!(back, TaskSource::CombatAchievement);
    }
}
