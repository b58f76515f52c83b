use chrono::DateTime;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::nav;
use crate::tui::app::App;

/// Render the detail pane for the selected issue.
pub fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let Some(issue) = app.selected_issue() else {
        let empty = Paragraph::new(" Select an issue")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    };

    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text).bg(bg);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Issue Details",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(format!(" {}  ", issue.id), label),
        Span::styled(
            issue.title.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(" Status    ", label),
        Span::styled(
            issue.status.clone(),
            Style::default()
                .fg(app.theme.status_color(&issue.status))
                .bg(bg),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Type      ", label),
        Span::styled(issue.issue_type.clone(), value),
    ]));
    if issue.priority > 0 {
        lines.push(Line::from(vec![
            Span::styled(" Priority  ", label),
            Span::styled(format!("P{}", issue.priority), value),
        ]));
    }
    if !issue.owner.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" Owner     ", label),
            Span::styled(issue.owner.clone(), value),
        ]));
    }
    if !issue.updated_at.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" Updated   ", label),
            Span::styled(format_time(&issue.updated_at), value),
        ]));
    }

    if !issue.description.trim().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Notes",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
        let body_width = width.saturating_sub(2).max(1);
        for raw in issue.description.lines() {
            if raw.trim().is_empty() {
                lines.push(Line::from(""));
                continue;
            }
            for wrapped in nav::wrap_title(raw, body_width, body_width) {
                lines.push(Line::from(vec![
                    Span::styled(" ", Style::default().bg(bg)),
                    Span::styled(wrapped, value),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Compact local-ish display of an RFC 3339 timestamp; unparseable
/// values pass through untouched.
fn format_time(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(at) => at.format("%b %d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_formats_compactly() {
        assert_eq!(format_time("2026-08-29T14:03:00Z"), "Aug 29 14:03");
        assert_eq!(format_time("yesterday"), "yesterday");
    }
}
