use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

/// Live search: the list refreshes on every edit, and selection/scroll
/// are re-validated against the narrowed list.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.query.search_text.clear();
            app.mode = Mode::Navigate;
            app.refresh_view();
        }
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            pop_grapheme(&mut app.query.search_text);
            app.refresh_view();
        }
        KeyCode::Char(c) => {
            app.query.search_text.push(c);
            app.refresh_view();
        }
        _ => {}
    }
}
