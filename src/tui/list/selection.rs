use std::collections::HashMap;

use crate::model::task::{Task, TaskTier};

/// Per-tier selection state for the task list.
///
/// The selected index is tracked separately for each tier so switching
/// tabs returns to where the player left off. Indices always refer to the
/// tier's currently visible (filtered and sorted) list, so they are
/// re-validated with `normalize_for_tier` whenever that list changes, and
/// re-anchored with `select_task` when a reorder moves the selected task.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    selected_by_tier: HashMap<TaskTier, usize>,
    active_tier: TaskTier,
}

impl SelectionModel {
    pub fn new(active_tier: TaskTier) -> Self {
        SelectionModel {
            selected_by_tier: HashMap::new(),
            active_tier,
        }
    }

    pub fn active_tier(&self) -> TaskTier {
        self.active_tier
    }

    pub fn set_active_tier(&mut self, tier: TaskTier) {
        self.active_tier = tier;
    }

    /// Selected index for the active tier (0 if no entry yet)
    pub fn selected_index(&self) -> usize {
        self.selected_by_tier
            .get(&self.active_tier)
            .copied()
            .unwrap_or(0)
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_by_tier.insert(self.active_tier, index);
    }

    /// Seed per-tier entries from persisted state
    pub fn restore(&mut self, saved: &HashMap<TaskTier, usize>) {
        for (&tier, &index) in saved {
            self.selected_by_tier.insert(tier, index);
        }
    }

    /// Snapshot of per-tier entries for persistence
    pub fn snapshot(&self) -> HashMap<TaskTier, usize> {
        self.selected_by_tier.clone()
    }

    /// Make the tier's entry valid for its current visible list.
    ///
    /// A missing entry defaults to the first row — or, when completed
    /// tasks are not sorted first, to the first incomplete row so the
    /// selection starts on something actionable. An existing entry is
    /// clamped into bounds in case the list shrank under a new filter.
    pub fn normalize_for_tier(
        &mut self,
        tier: TaskTier,
        tasks: &[&Task],
        completed_first: bool,
        is_completed: impl Fn(&Task) -> bool,
    ) {
        self.active_tier = tier;

        if tasks.is_empty() {
            self.selected_by_tier.insert(tier, 0);
            return;
        }

        let max = tasks.len() - 1;
        match self.selected_by_tier.get(&tier) {
            Some(&existing) => {
                self.selected_by_tier.insert(tier, existing.min(max));
            }
            None => {
                let mut start = 0;
                if !completed_first
                    && let Some(i) = tasks.iter().position(|t| !is_completed(t))
                {
                    start = i;
                }
                self.selected_by_tier.insert(tier, start.min(max));
            }
        }
    }

    /// Re-anchor the selection to wherever `target_id` now appears in the
    /// (possibly reordered) list. Keeps the visual selection glued to the
    /// task the player just acted on, not to whatever row holds its old
    /// index. No-op if the task is gone (filtered out) — the stale index
    /// stands until the next normalize.
    pub fn select_task(&mut self, tier: TaskTier, tasks: &[&Task], target_id: &str) {
        self.active_tier = tier;
        if target_id.is_empty() {
            return;
        }
        if let Some(i) = tasks.iter().position(|t| t.id == target_id) {
            self.selected_by_tier.insert(tier, i);
        }
    }

    pub fn move_up(&mut self, count: usize) {
        self.step(count, -1);
    }

    pub fn move_down(&mut self, count: usize) {
        self.step(count, 1);
    }

    pub fn page_up(&mut self, count: usize, page: usize) {
        self.step(count, -(page as isize));
    }

    pub fn page_down(&mut self, count: usize, page: usize) {
        self.step(count, page as isize);
    }

    fn step(&mut self, count: usize, delta: isize) {
        if count == 0 {
            self.set_selected_index(0);
            return;
        }
        let max = (count - 1) as isize;
        let next = (self.selected_index() as isize + delta).clamp(0, max);
        self.set_selected_index(next as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskSource;

    fn task(id: &str) -> Task {
        Task::new(id, id, TaskSource::CombatAchievement, Some(TaskTier::Easy))
    }

    fn refs(tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().collect()
    }

    // --- normalize_for_tier ---

    #[test]
    fn missing_entry_defaults_to_zero_when_completed_first() {
        let tasks = vec![task("a"), task("b")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.normalize_for_tier(TaskTier::Easy, &refs(&tasks), true, |t| t.id == "a");
        assert_eq!(sel.selected_index(), 0);
    }

    #[test]
    fn missing_entry_defaults_to_first_incomplete() {
        let tasks = vec![task("a"), task("b"), task("c")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        // a and b done, incomplete-first ordering -> select c
        sel.normalize_for_tier(TaskTier::Easy, &refs(&tasks), false, |t| t.id != "c");
        assert_eq!(sel.selected_index(), 2);
    }

    #[test]
    fn all_completed_falls_back_to_zero() {
        let tasks = vec![task("a"), task("b")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.normalize_for_tier(TaskTier::Easy, &refs(&tasks), false, |_| true);
        assert_eq!(sel.selected_index(), 0);
    }

    #[test]
    fn empty_list_forces_zero() {
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.set_selected_index(7);
        sel.normalize_for_tier(TaskTier::Easy, &[], false, |_| false);
        assert_eq!(sel.selected_index(), 0);
    }

    #[test]
    fn existing_entry_is_clamped_when_list_shrinks() {
        let tasks = vec![task("a"), task("b"), task("c")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.set_selected_index(2);
        let shorter = vec![task("a"), task("b")];
        sel.normalize_for_tier(TaskTier::Easy, &refs(&shorter), true, |_| false);
        assert_eq!(sel.selected_index(), 1);
        // and an in-bounds entry is left alone
        sel.normalize_for_tier(TaskTier::Easy, &refs(&tasks), true, |_| false);
        assert_eq!(sel.selected_index(), 1);
    }

    #[test]
    fn tiers_are_independent() {
        let tasks = vec![task("a"), task("b"), task("c")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.normalize_for_tier(TaskTier::Easy, &refs(&tasks), true, |_| false);
        sel.set_selected_index(2);
        sel.normalize_for_tier(TaskTier::Hard, &refs(&tasks), true, |_| false);
        assert_eq!(sel.selected_index(), 0);
        sel.set_active_tier(TaskTier::Easy);
        assert_eq!(sel.selected_index(), 2);
    }

    // --- select_task ---

    #[test]
    fn reanchors_to_moved_task() {
        let tasks = vec![task("a"), task("c"), task("b")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.set_selected_index(1);
        // "b" moved to the end after a resort
        sel.select_task(TaskTier::Easy, &refs(&tasks), "b");
        assert_eq!(sel.selected_index(), 2);
    }

    #[test]
    fn missing_target_leaves_index_alone() {
        let tasks = vec![task("a"), task("b")];
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.set_selected_index(1);
        sel.select_task(TaskTier::Easy, &refs(&tasks), "zzz");
        assert_eq!(sel.selected_index(), 1);
        sel.select_task(TaskTier::Easy, &refs(&tasks), "");
        assert_eq!(sel.selected_index(), 1);
    }

    // --- movement ---

    #[test]
    fn moves_clamp_at_both_ends() {
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.move_up(5);
        assert_eq!(sel.selected_index(), 0);
        sel.move_down(5);
        assert_eq!(sel.selected_index(), 1);
        sel.set_selected_index(4);
        sel.move_down(5);
        assert_eq!(sel.selected_index(), 4);
    }

    #[test]
    fn paging_clamps() {
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.page_down(10, 4);
        assert_eq!(sel.selected_index(), 4);
        sel.page_down(10, 40);
        assert_eq!(sel.selected_index(), 9);
        sel.page_up(10, 4);
        assert_eq!(sel.selected_index(), 5);
        sel.page_up(10, 40);
        assert_eq!(sel.selected_index(), 0);
    }

    #[test]
    fn zero_count_forces_zero() {
        let mut sel = SelectionModel::new(TaskTier::Easy);
        sel.set_selected_index(3);
        sel.move_down(0);
        assert_eq!(sel.selected_index(), 0);
        sel.set_selected_index(3);
        sel.page_up(0, 2);
        assert_eq!(sel.selected_index(), 0);
    }
}
