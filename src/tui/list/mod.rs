mod scroll;
mod selection;

pub use scroll::ScrollController;
pub use selection::SelectionModel;

use crate::model::task::{Task, TaskTier};

/// Pairs the selection model with the scroll controller so callers reset
/// and reconcile them together.
#[derive(Debug, Clone)]
pub struct ListView {
    pub selection: SelectionModel,
    pub scroll: ScrollController,
}

impl ListView {
    pub fn new(active_tier: TaskTier, rows_per_notch: u32, suppress_arm: u32) -> Self {
        ListView {
            selection: SelectionModel::new(active_tier),
            scroll: ScrollController::new(rows_per_notch, suppress_arm),
        }
    }

    /// The query, tier, or tab changed: drop the scroll offset and
    /// re-validate the tier's selection against the new list.
    pub fn reset_after_query_change(
        &mut self,
        tier: TaskTier,
        tasks: &[&Task],
        completed_first: bool,
        is_completed: impl Fn(&Task) -> bool,
    ) {
        self.scroll.reset();
        self.selection
            .normalize_for_tier(tier, tasks, completed_first, is_completed);
    }

    pub fn on_wheel(
        &mut self,
        rotation: f64,
        viewport_h: usize,
        row_block: usize,
        total_rows: usize,
    ) -> usize {
        self.scroll.on_wheel(rotation, viewport_h, row_block, total_rows)
    }

    pub fn ensure_selection_visible(
        &mut self,
        total_rows: usize,
        viewport_h: usize,
        row_block: usize,
    ) {
        self.scroll
            .ensure_selection_visible(total_rows, viewport_h, row_block, &mut self.selection);
    }
}
