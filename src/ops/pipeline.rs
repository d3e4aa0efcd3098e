use crate::model::query::ListQuery;
use crate::model::task::Task;

use super::sort::SortSpec;
use super::{filter, search};

/// Filter and order a task list for display.
///
/// The one entry point the UI calls each frame: tokenizes the query text
/// once, keeps tasks that pass both search and the source/status criteria,
/// and stable-sorts the survivors. Pure — identical inputs always yield an
/// identical ordered list, with ties keeping their input order. Tasks are
/// never cloned or mutated; the result borrows from `tasks`.
pub fn apply_query<'a, F>(tasks: &'a [Task], query: &ListQuery, is_completed: F) -> Vec<&'a Task>
where
    F: Fn(&Task) -> bool,
{
    if tasks.is_empty() {
        return Vec::new();
    }

    let terms = search::query_terms(&query.search_text);
    let spec = SortSpec::from_query(query);

    let mut out: Vec<(&'a Task, bool)> = Vec::with_capacity(tasks.len());
    for task in tasks {
        if !search::matches(task, &terms) {
            continue;
        }
        let completed = is_completed(task);
        if !filter::passes(task, query, completed) {
            continue;
        }
        out.push((task, completed));
    }

    // sort_by is stable: equal keys preserve input relative order
    out.sort_by(|(a, a_done), (b, b_done)| spec.compare(a, *a_done, b, *b_done));
    out.into_iter().map(|(task, _)| task).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::query::{StatusFilter, TierScope};
    use crate::model::task::{TaskSource, TaskTier};

    fn task(id: &str, name: &str, tier: TaskTier) -> Task {
        Task::new(id, name, TaskSource::CombatAchievement, Some(tier))
    }

    fn sample() -> Vec<Task> {
        vec![
            task("t1", "Kill 10 goblins", TaskTier::Easy),
            task("t2", "Defeat Zulrah", TaskTier::Hard),
            task("t3", "Bake a cake", TaskTier::Easy),
            task("t4", "Defeat Vorkath", TaskTier::Elite),
        ]
    }

    #[test]
    fn empty_input_returns_empty() {
        let out = apply_query(&[], &ListQuery::default(), |_| false);
        assert!(out.is_empty());
    }

    #[test]
    fn default_query_keeps_everything_in_name_order() {
        let tasks = sample();
        let out = apply_query(&tasks, &ListQuery::default(), |_| false);
        let names: Vec<&str> = out.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Bake a cake", "Defeat Vorkath", "Defeat Zulrah", "Kill 10 goblins"]
        );
    }

    #[test]
    fn search_and_filter_are_both_applied() {
        let tasks = sample();
        let mut q = ListQuery::default();
        q.search_text = "defeat".into();
        q.status_filter = StatusFilter::Incomplete;
        // t2 completed, so only t4 survives
        let out = apply_query(&tasks, &q, |t| t.id == "t2");
        let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t4"]);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let tasks = sample();
        let mut q = ListQuery::default();
        q.sort_by_tier = true;
        q.tier_scope = TierScope::AllTiers;
        let a: Vec<&str> = apply_query(&tasks, &q, |t| t.id == "t1")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let b: Vec<&str> = apply_query(&tasks, &q, |t| t.id == "t1")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn ties_keep_input_order() {
        // same name, same tier: stable sort must keep pack order
        let tasks = vec![
            task("first", "Same name", TaskTier::Easy),
            task("second", "Same name", TaskTier::Easy),
        ];
        let out = apply_query(&tasks, &ListQuery::default(), |_| false);
        let ids: Vec<&str> = out.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn tasks_are_returned_by_reference() {
        let tasks = sample();
        let out = apply_query(&tasks, &ListQuery::default(), |_| false);
        assert!(std::ptr::eq(out[0], &tasks[2]));
    }
}
