use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::query::TierScope;
use crate::tui::app::App;
use crate::tui::list::ScrollController;
use crate::util::unicode::truncate_to_width;

/// Windowed task rows: only the rows inside the scroll window are built.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    // Record viewport geometry for the input handlers before anything else
    app.list_viewport_lines = area.height as usize;

    let row_block = app.row_block();
    let visible_rows = ScrollController::visible_rows(area.height as usize, row_block);
    let offset = app.list.scroll.offset_rows();
    let selected = app.list.selection.selected_index();
    let show_tier = app.query.tier_scope == TierScope::AllTiers;

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  no tasks match",
            Style::default().fg(app.theme.dim),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(visible_rows * row_block);
    // the offset can exceed the list while wheel suppression is active
    // and the list shrinks; clamp the window start, never trust it
    let start = offset.min(tasks.len());
    let end = (start + visible_rows).min(tasks.len());
    for (row, task) in tasks[start..end].iter().enumerate() {
        let index = start + row;
        let done = app.is_completed(task);
        let is_selected = index == selected;
        let is_current = app.current_task.as_deref() == Some(task.id.as_str());

        let checkbox = if done { "[x]" } else { "[ ]" };
        let marker = if is_current { "»" } else { " " };
        let badge = format!("[{}]", task.source.badge());
        let tier_label = if show_tier {
            task.tier.map_or(" —", |t| t.label())
        } else {
            ""
        };

        let fixed = 3 + 1 + 1 + 1 + badge.len() + 1 + tier_label.len() + 2;
        let name_width = (area.width as usize).saturating_sub(fixed);
        let name = truncate_to_width(&task.name, name_width);

        let row_style = if is_selected {
            Style::default().bg(app.theme.selection_bg)
        } else {
            Style::default()
        };
        let name_style = if done {
            row_style.fg(app.theme.done).add_modifier(Modifier::CROSSED_OUT)
        } else if is_selected {
            row_style.fg(app.theme.text_bright)
        } else {
            row_style.fg(app.theme.text)
        };
        let check_style = if done {
            row_style.fg(app.theme.green)
        } else {
            row_style.fg(app.theme.dim)
        };

        let mut spans = vec![
            Span::styled(format!("{marker} "), row_style.fg(app.theme.current)),
            Span::styled(checkbox, check_style),
            Span::raw(" "),
            Span::styled(name, name_style),
            Span::raw(" "),
            Span::styled(badge, row_style.fg(app.theme.dim)),
        ];
        if show_tier {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                tier_label.to_string(),
                row_style.fg(app.theme.yellow),
            ));
        }
        lines.push(Line::from(spans));

        // Second line of a row block shows the description, dimmed
        if row_block > 1 {
            let desc = task.description.as_deref().unwrap_or("");
            let desc = truncate_to_width(desc, (area.width as usize).saturating_sub(8));
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(desc, row_style.fg(app.theme.dim)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
