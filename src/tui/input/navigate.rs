use crossterm::event::{KeyCode, KeyEvent};

use crate::model::query::{SourceFilter, StatusFilter, TierScope};
use crate::model::task::TaskTier;
use crate::tui::app::{App, Mode};
use crate::tui::list::ScrollController;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }

        // --- Movement ---
        KeyCode::Char('j') | KeyCode::Down => {
            let total = app.visible_tasks().len();
            app.list.selection.move_down(total);
            app.ensure_selection_visible();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let total = app.visible_tasks().len();
            app.list.selection.move_up(total);
            app.ensure_selection_visible();
        }
        KeyCode::PageDown => {
            let total = app.visible_tasks().len();
            let page = page_size(app);
            app.list.selection.page_down(total, page);
            app.ensure_selection_visible();
        }
        KeyCode::PageUp => {
            let total = app.visible_tasks().len();
            let page = page_size(app);
            app.list.selection.page_up(total, page);
            app.ensure_selection_visible();
        }
        KeyCode::Char('g') => {
            app.list.selection.set_selected_index(0);
            app.ensure_selection_visible();
        }
        KeyCode::Char('G') => {
            let total = app.visible_tasks().len();
            app.list.selection.set_selected_index(total.saturating_sub(1));
            app.ensure_selection_visible();
        }

        // --- Tier tabs ---
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            let tier = app.active_tier().next();
            app.set_active_tier(tier);
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            let tier = app.active_tier().prev();
            app.set_active_tier(tier);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let i = (c as usize) - ('1' as usize);
            app.set_active_tier(TaskTier::ALL[i]);
        }

        // --- Actions ---
        KeyCode::Char('x') | KeyCode::Char(' ') => {
            app.toggle_selected();
        }
        KeyCode::Char('r') => {
            app.roll_random();
        }
        KeyCode::Char('c') => {
            app.complete_current();
        }
        KeyCode::Enter | KeyCode::Char('d') => {
            app.show_detail = !app.show_detail;
        }

        // --- Query toggles (view resets each time) ---
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
        }
        KeyCode::Esc => {
            if !app.query.search_text.is_empty() {
                app.query.search_text.clear();
                app.refresh_view();
            } else if app.show_detail {
                app.show_detail = false;
            }
        }
        KeyCode::Char('s') => {
            app.query.sort_by_completion = !app.query.sort_by_completion;
            app.refresh_view();
        }
        KeyCode::Char('S') => {
            app.query.completed_first = !app.query.completed_first;
            app.refresh_view();
        }
        KeyCode::Char('t') => {
            app.query.sort_by_tier = !app.query.sort_by_tier;
            app.refresh_view();
        }
        KeyCode::Char('T') => {
            app.query.easy_tier_first = !app.query.easy_tier_first;
            app.refresh_view();
        }
        KeyCode::Char('o') => {
            app.query.source_filter = match app.query.source_filter {
                SourceFilter::All => SourceFilter::Ca,
                SourceFilter::Ca => SourceFilter::Clogs,
                SourceFilter::Clogs => SourceFilter::All,
            };
            app.refresh_view();
        }
        KeyCode::Char('u') => {
            app.query.status_filter = match app.query.status_filter {
                StatusFilter::All => StatusFilter::Incomplete,
                StatusFilter::Incomplete => StatusFilter::Complete,
                StatusFilter::Complete => StatusFilter::All,
            };
            app.refresh_view();
        }
        KeyCode::Char('a') => {
            app.query.tier_scope = match app.query.tier_scope {
                TierScope::ThisTier => TierScope::AllTiers,
                TierScope::AllTiers => TierScope::ThisTier,
            };
            app.refresh_view();
        }

        _ => {}
    }
}

/// One page = one viewport of rows
fn page_size(app: &App) -> usize {
    ScrollController::visible_rows(app.list_viewport_lines, app.row_block()).max(1)
}
