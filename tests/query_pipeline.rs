//! End-to-end tests for the query pipeline and the list widgets built on
//! top of it: filtering, search, sorting, selection re-anchoring, and
//! scroll behavior, exercised together the way the TUI drives them.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tiertask::model::query::{ListQuery, SourceFilter, StatusFilter, TierScope};
use tiertask::model::task::{Task, TaskSource, TaskTier};
use tiertask::ops::pipeline::apply_query;
use tiertask::tui::list::{ScrollController, SelectionModel};

fn task(id: &str, name: &str, source: TaskSource, tier: Option<TaskTier>) -> Task {
    Task::new(id, name, source, tier)
}

fn sample_pack() -> Vec<Task> {
    vec![
        task("goblin", "Kill a goblin", TaskSource::CombatAchievement, Some(TaskTier::Easy)),
        task("dragon", "Kill a green dragon", TaskSource::CombatAchievement, Some(TaskTier::Medium)),
        task("kbd", "Kill the King Black Dragon", TaskSource::CombatAchievement, Some(TaskTier::Hard)),
        task("whip", "Obtain an Abyssal whip", TaskSource::CollectionLog, Some(TaskTier::Hard)),
        task("pet", "Receive any boss pet", TaskSource::CollectionLog, None),
    ]
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn default_query_shows_everything_in_name_order() {
    let tasks = sample_pack();
    let visible = apply_query(&tasks, &ListQuery::default(), |_| false);
    assert_eq!(ids(&visible), vec!["goblin", "dragon", "kbd", "whip", "pet"]);
}

#[test]
fn pipeline_is_deterministic_for_a_fixed_query() {
    let tasks = sample_pack();
    let query = ListQuery {
        search_text: "kill".into(),
        sort_by_tier: true,
        tier_scope: TierScope::AllTiers,
        ..ListQuery::default()
    };
    let a = ids(&apply_query(&tasks, &query, |t| t.id == "goblin"));
    let b = ids(&apply_query(&tasks, &query, |t| t.id == "goblin"));
    assert_eq!(a, b);
}

#[test]
fn reapplying_a_query_to_its_own_output_changes_nothing() {
    let tasks = sample_pack();
    let done: HashSet<&str> = HashSet::from(["kbd"]);
    let query = ListQuery {
        search_text: "kill".into(),
        tier_scope: TierScope::AllTiers,
        sort_by_tier: true,
        sort_by_completion: true,
        ..ListQuery::default()
    };
    let first = apply_query(&tasks, &query, |t| done.contains(t.id.as_str()));
    let owned: Vec<Task> = first.iter().map(|&t| t.clone()).collect();
    let second = apply_query(&owned, &query, |t| done.contains(t.id.as_str()));
    assert_eq!(ids(&second), ids(&first));
}

#[test]
fn search_terms_are_anded_prefixes() {
    let tasks = sample_pack();
    let mut query = ListQuery::default();

    query.search_text = "kill dragon".into();
    let visible = apply_query(&tasks, &query, |_| false);
    assert_eq!(ids(&visible), vec!["dragon", "kbd"]);

    // prefix, not substring: "ragon" matches nothing
    query.search_text = "ragon".into();
    assert!(apply_query(&tasks, &query, |_| false).is_empty());
}

#[test]
fn stop_word_only_search_matches_everything() {
    let tasks = sample_pack();
    let query = ListQuery {
        search_text: "the a of".into(),
        ..ListQuery::default()
    };
    let visible = apply_query(&tasks, &query, |_| false);
    assert_eq!(visible.len(), tasks.len());
}

#[test]
fn source_and_status_filters_compose_with_search() {
    let tasks = sample_pack();
    let done: HashSet<&str> = HashSet::from(["kbd"]);
    let query = ListQuery {
        search_text: "kill".into(),
        source_filter: SourceFilter::Ca,
        status_filter: StatusFilter::Incomplete,
        ..ListQuery::default()
    };
    let visible = apply_query(&tasks, &query, |t| done.contains(t.id.as_str()));
    assert_eq!(ids(&visible), vec!["goblin", "dragon"]);
}

#[test]
fn tier_sort_puts_easier_tasks_first_and_untiered_last() {
    let tasks = sample_pack();
    let query = ListQuery {
        tier_scope: TierScope::AllTiers,
        sort_by_tier: true,
        ..ListQuery::default()
    };
    let visible = apply_query(&tasks, &query, |_| false);
    assert_eq!(ids(&visible), vec!["goblin", "dragon", "kbd", "whip", "pet"]);

    let reversed = ListQuery {
        easy_tier_first: false,
        ..query
    };
    let visible = apply_query(&tasks, &reversed, |_| false);
    // untiered still carries the maximum tier key; the hard pair falls
    // back to the name tiebreak
    assert_eq!(ids(&visible), vec!["pet", "kbd", "whip", "dragon", "goblin"]);
}

#[test]
fn completion_sort_outranks_tier_sort() {
    let tasks = sample_pack();
    let done: HashSet<&str> = HashSet::from(["goblin"]);
    let query = ListQuery {
        tier_scope: TierScope::AllTiers,
        sort_by_tier: true,
        sort_by_completion: true,
        ..ListQuery::default()
    };
    let visible = apply_query(&tasks, &query, |t| done.contains(t.id.as_str()));
    // incomplete tasks ordered by tier, the completed easy task sinks last
    assert_eq!(ids(&visible), vec!["dragon", "kbd", "whip", "pet", "goblin"]);
}

#[test]
fn completion_sort_is_inert_under_a_status_filter() {
    let tasks = sample_pack();
    let done: HashSet<&str> = HashSet::from(["goblin"]);
    let query = ListQuery {
        status_filter: StatusFilter::Incomplete,
        sort_by_completion: true,
        ..ListQuery::default()
    };
    let visible = apply_query(&tasks, &query, |t| done.contains(t.id.as_str()));
    assert_eq!(ids(&visible), vec!["dragon", "kbd", "whip", "pet"]);
}

#[test]
fn selection_re_anchors_to_the_task_after_a_reorder() {
    let tasks = sample_pack();
    let mut selection = SelectionModel::new(TaskTier::Easy);

    let before = apply_query(&tasks, &ListQuery::default(), |_| false);
    selection.set_selected_index(1); // "dragon"
    let followed = before[selection.selected_index()].id.clone();

    // completing "dragon" with completion sort on moves it to the end
    let done: HashSet<&str> = HashSet::from(["dragon"]);
    let query = ListQuery {
        tier_scope: TierScope::AllTiers,
        sort_by_completion: true,
        ..ListQuery::default()
    };
    let after = apply_query(&tasks, &query, |t| done.contains(t.id.as_str()));
    selection.select_task(TaskTier::Easy, &after, &followed);

    assert_eq!(after[selection.selected_index()].id, followed);
    assert_eq!(selection.selected_index(), after.len() - 1);
}

#[test]
fn selection_clamps_when_the_list_shrinks() {
    let tasks = sample_pack();
    let mut selection = SelectionModel::new(TaskTier::Easy);
    selection.set_selected_index(4);

    let query = ListQuery {
        search_text: "kill".into(),
        ..ListQuery::default()
    };
    let narrowed = apply_query(&tasks, &query, |_| false);
    selection.normalize_for_tier(TaskTier::Easy, &narrowed, false, |_| false);
    assert_eq!(selection.selected_index(), narrowed.len() - 1);
}

#[test]
fn scroll_offset_clamps_to_the_last_full_window() {
    // 10 rows, 4 visible -> max offset 6
    let mut scroll = ScrollController::new(3, 6);
    for _ in 0..100 {
        scroll.on_wheel(1.0, 4, 1, 10);
    }
    assert_eq!(scroll.offset_rows(), 6);
    for _ in 0..100 {
        scroll.on_wheel(-1.0, 4, 1, 10);
    }
    assert_eq!(scroll.offset_rows(), 0);
}

#[test]
fn wheel_suppresses_follow_scroll_for_a_few_ticks() {
    let mut scroll = ScrollController::new(3, 2);
    let mut selection = SelectionModel::new(TaskTier::Easy);
    scroll.on_wheel(1.0, 5, 1, 20);
    assert_eq!(scroll.offset_rows(), 3);

    // selection is above the window but the wheel wins for two ticks
    scroll.ensure_selection_visible(20, 5, 1, &mut selection);
    assert_eq!(scroll.offset_rows(), 3);
    scroll.ensure_selection_visible(20, 5, 1, &mut selection);
    assert_eq!(scroll.offset_rows(), 3);

    // then keyboard navigation snaps the window back
    scroll.ensure_selection_visible(20, 5, 1, &mut selection);
    assert_eq!(scroll.offset_rows(), 0);
}
