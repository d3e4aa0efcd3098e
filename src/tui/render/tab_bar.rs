use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::TaskTier;
use crate::ops::progress;
use crate::tui::app::App;

/// One tab per tier, with its completion percentage
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for tier in TaskTier::ALL {
        let pct = progress::tier_percent(&app.tasks, tier, |t| app.is_completed(t));
        let label = format!(" {} {}% ", tier.label(), pct);
        let style = if tier == app.active_tier() {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else if pct == 100 {
            Style::default().fg(app.theme.done)
        } else {
            Style::default().fg(app.theme.dim)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let tabs = Paragraph::new(Line::from(spans));
    frame.render_widget(tabs, Rect { height: 1, ..area });

    if area.height > 1 {
        let sep = "─".repeat(area.width as usize);
        let sep_line = Paragraph::new(Line::from(Span::styled(
            sep,
            Style::default().fg(app.theme.dim),
        )));
        frame.render_widget(
            sep_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}
