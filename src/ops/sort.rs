use std::cmp::Ordering;

use crate::model::query::{ListQuery, StatusFilter, TierScope};
use crate::model::task::{Task, TaskTier};

/// Which sort keys are actually active, resolved from the query up front.
///
/// The toggles on `ListQuery` are requests; the guards live here so the
/// pipeline is the single source of truth for "is this sort on". A status
/// filter other than ALL fixes completion state, which makes completion
/// sort meaningless, so it is suppressed. Tier sort only applies when the
/// list spans all tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub by_completion: bool,
    pub completed_first: bool,
    pub by_tier: bool,
    pub easy_tier_first: bool,
}

impl SortSpec {
    pub fn from_query(query: &ListQuery) -> Self {
        SortSpec {
            by_completion: query.sort_by_completion && query.status_filter == StatusFilter::All,
            completed_first: query.completed_first,
            by_tier: query.sort_by_tier && query.tier_scope == TierScope::AllTiers,
            easy_tier_first: query.easy_tier_first,
        }
    }

    /// Total order over tasks: completion key, then tier key, then
    /// case-insensitive name as the unconditional final tiebreak.
    ///
    /// Completion state is passed in precomputed so the comparator stays
    /// cheap inside a sort. Equal keys rely on the caller using a stable
    /// sort to preserve input order.
    pub fn compare(&self, a: &Task, a_completed: bool, b: &Task, b_completed: bool) -> Ordering {
        if self.by_completion {
            let mut a_key = u8::from(a_completed);
            let mut b_key = u8::from(b_completed);
            if self.completed_first {
                a_key = 1 - a_key;
                b_key = 1 - b_key;
            }
            match a_key.cmp(&b_key) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        if self.by_tier {
            // missing tier sorts as maximum
            let a_key = a.tier.map_or(u8::MAX, TaskTier::rank);
            let b_key = b.tier.map_or(u8::MAX, TaskTier::rank);
            let ord = if self.easy_tier_first {
                a_key.cmp(&b_key)
            } else {
                b_key.cmp(&a_key)
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }

        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    }
}
