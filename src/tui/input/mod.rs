mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Search => search::handle_search(app, key),
    }
}

/// Route wheel events through the scroll controller. One crossterm scroll
/// event counts as one notch.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let rotation = match mouse.kind {
        MouseEventKind::ScrollDown => 1.0,
        MouseEventKind::ScrollUp => -1.0,
        _ => return,
    };
    app.on_wheel(rotation);
}
