use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::query::{SourceFilter, StatusFilter, TierScope};
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

/// Bottom row: search box / status message on the left, query summary on
/// the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let left = match app.mode {
        Mode::Search => format!(" /{}▏", app.query.search_text),
        Mode::Navigate => {
            if let Some(status) = &app.status {
                format!(" {status}")
            } else if let Some(current) = app.current_task_ref() {
                format!(" current: {}", current.name)
            } else {
                String::from(" r:roll  x:done  /:search  q:quit")
            }
        }
    };

    let mut flags: Vec<&str> = Vec::new();
    match app.query.source_filter {
        SourceFilter::All => {}
        SourceFilter::Ca => flags.push("src:ca"),
        SourceFilter::Clogs => flags.push("src:clog"),
    }
    match app.query.status_filter {
        StatusFilter::All => {}
        StatusFilter::Incomplete => flags.push("st:open"),
        StatusFilter::Complete => flags.push("st:done"),
    }
    if app.query.tier_scope == TierScope::AllTiers {
        flags.push("all-tiers");
    }
    if app.query.sort_by_completion {
        flags.push("sort:done");
    }
    if app.query.sort_by_tier {
        flags.push("sort:tier");
    }
    if !app.query.search_text.is_empty() && app.mode == Mode::Navigate {
        flags.push("search");
    }
    let right = if flags.is_empty() {
        String::new()
    } else {
        format!("[{}] ", flags.join(" "))
    };

    let width = area.width as usize;
    let left = truncate_to_width(&left, width.saturating_sub(right.len()));
    let pad = width.saturating_sub(left.chars().count() + right.chars().count());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(app.theme.text)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(app.theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
