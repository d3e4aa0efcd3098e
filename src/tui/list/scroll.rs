use super::selection::SelectionModel;

/// Row-based viewport scrolling with fractional wheel accumulation.
///
/// Wheel rotation arrives in notches (trackpads send fractions of one);
/// the fractional remainder carries over between events so slow trackpad
/// scrolling still adds up to whole rows. After a wheel event a small
/// suppression counter skips the next few selection-visibility passes so
/// wheel scrolling doesn't get yanked back to the keyboard selection.
#[derive(Debug, Clone)]
pub struct ScrollController {
    rows_per_notch: u32,
    suppress_arm: u32,
    offset_rows: usize,
    wheel_remainder_rows: f64,
    suppress_ticks: u32,
}

impl ScrollController {
    pub fn new(rows_per_notch: u32, suppress_arm: u32) -> Self {
        ScrollController {
            rows_per_notch: rows_per_notch.max(1),
            suppress_arm,
            offset_rows: 0,
            wheel_remainder_rows: 0.0,
            suppress_ticks: 0,
        }
    }

    /// First visible row
    pub fn offset_rows(&self) -> usize {
        self.offset_rows
    }

    /// How many whole rows fit in the viewport (0 on degenerate input)
    pub fn visible_rows(viewport_h: usize, row_block: usize) -> usize {
        if viewport_h == 0 || row_block == 0 {
            return 0;
        }
        viewport_h / row_block
    }

    /// Apply wheel rotation in row units, carrying the fractional
    /// remainder. Returns the new offset.
    pub fn on_wheel(
        &mut self,
        rotation: f64,
        viewport_h: usize,
        row_block: usize,
        total_rows: usize,
    ) -> usize {
        if rotation == 0.0 || viewport_h == 0 || row_block == 0 || total_rows == 0 {
            return self.offset_rows;
        }

        let visible = Self::visible_rows(viewport_h, row_block);
        let max_offset = total_rows.saturating_sub(visible);

        let rows = rotation * f64::from(self.rows_per_notch) + self.wheel_remainder_rows;
        // truncate toward zero: floor for positive, ceil for negative
        let delta = rows.trunc() as i64;
        self.wheel_remainder_rows = rows - delta as f64;
        if delta == 0 {
            return self.offset_rows;
        }

        let next = self.offset_rows as i64 + delta;
        self.offset_rows = next.clamp(0, max_offset as i64) as usize;
        // skip the next few reconciliation passes so the scroll doesn't snap back
        self.suppress_ticks = self.suppress_arm;
        self.offset_rows
    }

    /// Slide the offset the minimum amount that brings the selected row
    /// back inside the window. Skipped (decrementing the armed counter)
    /// right after wheel input — this is the keyboard-navigation path and
    /// must not fight the wheel.
    pub fn ensure_selection_visible(
        &mut self,
        total_rows: usize,
        viewport_h: usize,
        row_block: usize,
        selection: &mut SelectionModel,
    ) {
        if self.suppress_ticks > 0 {
            self.suppress_ticks -= 1;
            return;
        }
        let visible = Self::visible_rows(viewport_h, row_block);
        let max_offset = total_rows.saturating_sub(visible);
        // the list may have shrunk since the last wheel event; pull the
        // offset back into range before anything else
        self.offset_rows = self.offset_rows.min(max_offset);
        if total_rows == 0 || visible == 0 {
            return;
        }

        let sel = selection.selected_index().min(total_rows - 1);
        selection.set_selected_index(sel);

        if sel < self.offset_rows {
            self.offset_rows = sel;
        } else if sel >= self.offset_rows + visible {
            self.offset_rows = sel - visible + 1;
        }
        self.offset_rows = self.offset_rows.min(max_offset);
    }

    /// Called whenever the query, tier, or tab changes — a scroll offset
    /// is meaningless across a different list.
    pub fn reset(&mut self) {
        self.offset_rows = 0;
        self.wheel_remainder_rows = 0.0;
    }
}
