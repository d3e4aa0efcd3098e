use rand::Rng;

use crate::model::task::{Task, TaskTier};

/// Number of tasks in a tier
pub fn tier_total(tasks: &[Task], tier: TaskTier) -> usize {
    tasks.iter().filter(|t| t.tier == Some(tier)).count()
}

/// Number of completed tasks in a tier
pub fn tier_done(tasks: &[Task], tier: TaskTier, is_completed: impl Fn(&Task) -> bool) -> usize {
    tasks
        .iter()
        .filter(|t| t.tier == Some(tier) && is_completed(t))
        .count()
}

/// Completion percentage for a tier, floored (integer division)
pub fn tier_percent(tasks: &[Task], tier: TaskTier, is_completed: impl Fn(&Task) -> bool) -> u8 {
    let total = tier_total(tasks, tier);
    if total == 0 {
        return 0;
    }
    let done = tier_done(tasks, tier, is_completed);
    ((done * 100) / total) as u8
}

/// Progress label like `12/40 (30%)`
pub fn tier_progress_label(
    tasks: &[Task],
    tier: TaskTier,
    is_completed: impl Fn(&Task) -> bool,
) -> String {
    let total = tier_total(tasks, tier);
    let done = tier_done(tasks, tier, &is_completed);
    let pct = if total == 0 { 0 } else { (done * 100) / total };
    format!("{done}/{total} ({pct}%)")
}

/// The tier the player is currently working through: the first tier in
/// progression order with at least one incomplete task. `None` when the
/// whole pack is complete (or empty).
pub fn current_tier(tasks: &[Task], is_completed: impl Fn(&Task) -> bool) -> Option<TaskTier> {
    TaskTier::ALL.into_iter().find(|&tier| {
        tasks
            .iter()
            .any(|t| t.tier == Some(tier) && !is_completed(t))
    })
}

/// Roll a uniformly random incomplete task from the current tier
pub fn roll_random<'a, R: Rng>(
    tasks: &'a [Task],
    is_completed: impl Fn(&Task) -> bool,
    rng: &mut R,
) -> Option<&'a Task> {
    let tier = current_tier(tasks, &is_completed)?;
    let available: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.tier == Some(tier) && !is_completed(t))
        .collect();
    if available.is_empty() {
        return None;
    }
    Some(available[rng.gen_range(0..available.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn task(id: &str, tier: TaskTier) -> Task {
        Task::new(id, id, TaskSource::CombatAchievement, Some(tier))
    }

    fn sample() -> Vec<Task> {
        vec![
            task("e1", TaskTier::Easy),
            task("e2", TaskTier::Easy),
            task("e3", TaskTier::Easy),
            task("m1", TaskTier::Medium),
        ]
    }

    #[test]
    fn percent_is_floored() {
        let tasks = sample();
        // 1 of 3 easy done = 33.33% -> 33
        let pct = tier_percent(&tasks, TaskTier::Easy, |t| t.id == "e1");
        assert_eq!(pct, 33);
    }

    #[test]
    fn percent_of_empty_tier_is_zero() {
        let tasks = sample();
        assert_eq!(tier_percent(&tasks, TaskTier::Grandmaster, |_| true), 0);
    }

    #[test]
    fn progress_label_format() {
        let tasks = sample();
        let label = tier_progress_label(&tasks, TaskTier::Easy, |t| t.id == "e1");
        assert_eq!(label, "1/3 (33%)");
    }

    #[test]
    fn current_tier_skips_finished_tiers() {
        let tasks = sample();
        assert_eq!(current_tier(&tasks, |_| false), Some(TaskTier::Easy));
        // all easy done -> medium is current
        let tier = current_tier(&tasks, |t| t.id.starts_with('e'));
        assert_eq!(tier, Some(TaskTier::Medium));
    }

    #[test]
    fn current_tier_none_when_pack_complete() {
        let tasks = sample();
        assert_eq!(current_tier(&tasks, |_| true), None);
        assert_eq!(current_tier(&[], |_| false), None);
    }

    #[test]
    fn roll_only_picks_incomplete_from_current_tier() {
        let tasks = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = roll_random(&tasks, |t| t.id == "e1", &mut rng)
                .map(|t| t.id.clone())
                .unwrap();
            assert!(picked == "e2" || picked == "e3");
        }
    }

    #[test]
    fn roll_none_when_everything_done() {
        let tasks = sample();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(roll_random(&tasks, |_| true, &mut rng).is_none());
    }
}
