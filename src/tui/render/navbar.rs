use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the top bar: app title on the left, freshness (or the last
/// fetch error) on the right.
pub fn render_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " bd dashboard",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let (right, right_style) = match (&app.error, app.last_updated) {
        (Some(err), _) => (
            format!("{err} "),
            Style::default().fg(app.theme.red).bg(bg),
        ),
        (None, Some(at)) => (
            format!("Updated {} ", at.format("%H:%M:%S")),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        (None, None) => (
            "Loading... ".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    };

    let left_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let right = truncate_to_width(&right, width.saturating_sub(left_width + 2));
    let right_width = display_width(&right);
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, right_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the summary counts row under the title bar, one tag per
/// status bucket.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let s = &app.summary;
    let sep = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(
        format!(" {} issues", s.total_issues),
        Style::default().fg(app.theme.text).bg(bg),
    )];
    let mut add = |count: i64, label: &str, style: Style| {
        spans.push(Span::styled("  \u{00b7}  ", sep));
        spans.push(Span::styled(format!("{count} {label}"), style));
    };
    add(
        s.open_issues,
        "open",
        Style::default().fg(app.theme.green).bg(bg),
    );
    add(
        s.ready_issues,
        "ready",
        Style::default().fg(app.theme.green).bg(bg),
    );
    add(
        s.in_progress_issues,
        "in progress",
        Style::default().fg(app.theme.cyan).bg(bg),
    );
    add(
        s.blocked_issues,
        "blocked",
        Style::default().fg(app.theme.red).bg(bg),
    );
    add(
        s.deferred_issues,
        "deferred",
        Style::default().fg(app.theme.yellow).bg(bg),
    );
    add(
        s.closed_issues,
        "closed",
        Style::default().fg(app.theme.dim).bg(bg),
    );

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
