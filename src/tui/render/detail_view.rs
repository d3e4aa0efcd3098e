use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::App;

/// Details for the selected task
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let tasks = app.visible_tasks();
    let Some(task) = tasks.get(app.list.selection.selected_index()).copied() else {
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        task.name.clone(),
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    let tier = task.tier.map_or("—", |t| t.label());
    lines.push(meta_line(app, "tier", tier));
    lines.push(meta_line(app, "source", task.source.badge()));

    if let Some(done_at) = app.completed.get(&task.id) {
        let when = done_at.format("%Y-%m-%d").to_string();
        lines.push(meta_line(app, "completed", &when));
    } else {
        lines.push(meta_line(app, "completed", "no"));
    }
    if app.current_task.as_deref() == Some(task.id.as_str()) {
        lines.push(meta_line(app, "rolled", "current task"));
    }

    if let Some(desc) = &task.description {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            desc.clone(),
            Style::default().fg(app.theme.text),
        )));
    }
    if let Some(prereqs) = &task.prereqs {
        lines.push(Line::default());
        lines.push(meta_line(app, "prereqs", prereqs));
    }
    if let Some(url) = &task.wiki_url {
        lines.push(Line::default());
        lines.push(meta_line(app, "wiki", url));
    }

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.theme.dim));
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn meta_line<'a>(app: &App, key: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {key}: "), Style::default().fg(app.theme.dim)),
        Span::styled(value.to_string(), Style::default().fg(app.theme.text)),
    ])
}
