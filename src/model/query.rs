use serde::{Deserialize, Serialize};

use crate::model::task::TaskSource;

/// Single-select source filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    All,
    /// Combat Achievements only
    Ca,
    /// Collection Log only
    Clogs,
}

/// Single-select completion-status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Incomplete,
    Complete,
}

/// Whether the list shows only the active tier or every tier at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierScope {
    #[default]
    ThisTier,
    AllTiers,
}

/// Everything the task-list pipeline reads to produce the visible list.
///
/// Owned and mutated by the UI layer; the pipeline reads it fresh on every
/// evaluation. Sort toggles are requests — whether a sort is actually
/// active is resolved by `SortSpec::from_query`, which also applies the
/// guard conditions (status filter suppresses completion sort, tier scope
/// gates tier sort).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub source_filter: SourceFilter,
    #[serde(default)]
    pub status_filter: StatusFilter,
    #[serde(default)]
    pub tier_scope: TierScope,
    /// Sort by completion state
    #[serde(default)]
    pub sort_by_completion: bool,
    /// Direction for completion sort: completed rows first
    #[serde(default)]
    pub completed_first: bool,
    /// Sort by tier rank (only honored when scope is all-tiers)
    #[serde(default)]
    pub sort_by_tier: bool,
    /// Direction for tier sort: easiest first
    #[serde(default = "default_true")]
    pub easy_tier_first: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            search_text: String::new(),
            source_filter: SourceFilter::All,
            status_filter: StatusFilter::All,
            tier_scope: TierScope::ThisTier,
            sort_by_completion: false,
            completed_first: false,
            sort_by_tier: false,
            easy_tier_first: true,
        }
    }
}

impl ListQuery {
    /// Whether the source filter lets this source through
    pub fn allows_source(&self, source: TaskSource) -> bool {
        match self.source_filter {
            SourceFilter::All => true,
            SourceFilter::Ca => source == TaskSource::CombatAchievement,
            SourceFilter::Clogs => source == TaskSource::CollectionLog,
        }
    }

    /// Whether the status filter lets this completion state through
    pub fn allows_status(&self, completed: bool) -> bool {
        match self.status_filter {
            StatusFilter::All => true,
            StatusFilter::Incomplete => !completed,
            StatusFilter::Complete => completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_passes_everything() {
        let q = ListQuery::default();
        assert!(q.allows_source(TaskSource::CombatAchievement));
        assert!(q.allows_source(TaskSource::CollectionLog));
        assert!(q.allows_status(true));
        assert!(q.allows_status(false));
        assert!(q.easy_tier_first);
    }

    #[test]
    fn source_filter_restricts_to_one_source() {
        let mut q = ListQuery::default();
        q.source_filter = SourceFilter::Ca;
        assert!(q.allows_source(TaskSource::CombatAchievement));
        assert!(!q.allows_source(TaskSource::CollectionLog));

        q.source_filter = SourceFilter::Clogs;
        assert!(!q.allows_source(TaskSource::CombatAchievement));
        assert!(q.allows_source(TaskSource::CollectionLog));
    }

    #[test]
    fn status_filter_restricts_to_one_state() {
        let mut q = ListQuery::default();
        q.status_filter = StatusFilter::Incomplete;
        assert!(q.allows_status(false));
        assert!(!q.allows_status(true));

        q.status_filter = StatusFilter::Complete;
        assert!(!q.allows_status(false));
        assert!(q.allows_status(true));
    }

    #[test]
    fn serde_defaults_on_minimal_object() {
        // persisted query state may come from an older file with fields missing
        let q: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q, ListQuery::default());
    }
}
