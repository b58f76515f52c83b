use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Issue;
use crate::nav;
use crate::tui::app::{App, Column};
use crate::util::unicode::display_width;

/// Short status label shown at the right edge of a drawer row.
pub(super) fn status_badge(status: &str) -> &'static str {
    match status {
        "open" => "OPEN",
        "ready" => "READY",
        "in_progress" => "WIP",
        "blocked" => "BLKD",
        "closed" => "DONE",
        _ => "",
    }
}

fn badge_text(issue: &Issue) -> String {
    let status = status_badge(&issue.status);
    if issue.priority > 0 {
        if status.is_empty() {
            format!("P{}", issue.priority)
        } else {
            format!("P{} {}", issue.priority, status)
        }
    } else {
        status.to_string()
    }
}

fn row_title(issue: &Issue, row: &nav::DrawerRow) -> (String, &'static str) {
    let foldable = issue.is_epic() && row.has_children;
    let indicator = if foldable {
        if row.collapsed { "\u{25b8} " } else { "\u{25be} " }
    } else {
        ""
    };
    let title = if row.collapsed {
        format!("\u{25c6} {}", issue.title)
    } else {
        issue.title.clone()
    };
    (title, indicator)
}

fn row_line_count(issue: &Issue, row: &nav::DrawerRow, width: usize) -> usize {
    let (title, indicator) = row_title(issue, row);
    let prefix_width = display_width(&row.prefix) + display_width(indicator);
    nav::title_lines(&title, prefix_width, display_width(&badge_text(issue)), width).len()
}

/// Entries per page for one list. Rows scroll in entry units while
/// titles wrap to multiple physical lines, so the page is sized by the
/// tallest row; the selected entry is then always physically rendered.
pub(crate) fn page_size(
    column: &Column,
    collapsed: &HashSet<String>,
    width: usize,
    height: usize,
) -> usize {
    let rows = column.rows(collapsed);
    let tallest = rows
        .iter()
        .map(|row| row_line_count(column.issue(row.entry), row, width))
        .max()
        .unwrap_or(1);
    nav::rows_per_page(nav::column_lines(height), tallest)
}

/// Render the two issue lists in the drawer pane, each in its own half,
/// the active one with a bright header.
pub fn render_drawer(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (idx, column) in app.columns.iter().enumerate() {
        render_column(frame, app, column, idx == app.active, halves[idx]);
    }
}

fn render_column(frame: &mut Frame, app: &App, column: &Column, active: bool, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let rows = column.rows(&app.collapsed);
    let page = page_size(column, &app.collapsed, width, app.height);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let header = format!("{} ({})", column.title, rows.len());
    let header_style = if active {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let pad = width.saturating_sub(display_width(&header)) / 2;
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(header, header_style),
    ]));
    lines.push(Line::from(""));

    if rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " (none)",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    for (visible_idx, row) in rows
        .iter()
        .enumerate()
        .skip(column.list.offset)
        .take(page)
    {
        let issue = column.issue(row.entry);
        let selected = active && visible_idx == column.list.selected;
        push_row(&mut lines, app, issue, row, selected, width);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn push_row(
    lines: &mut Vec<Line<'_>>,
    app: &App,
    issue: &Issue,
    row: &nav::DrawerRow,
    selected: bool,
    width: usize,
) {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let (title, indicator) = row_title(issue, row);
    let badges = badge_text(issue);
    let badge_width = display_width(&badges);
    let prefix_width = display_width(&row.prefix) + display_width(indicator);
    let wrapped = nav::title_lines(&title, prefix_width, badge_width, width);

    let title_style = if issue.is_epic() {
        Style::default().fg(app.theme.epic).bg(bg)
    } else if !issue.is_open() {
        Style::default().fg(app.theme.dim).bg(bg)
    } else if selected {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    for (line_idx, text) in wrapped.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        if line_idx == 0 {
            spans.push(Span::styled(
                row.prefix.clone(),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            if !indicator.is_empty() {
                spans.push(Span::styled(
                    indicator,
                    Style::default().fg(app.theme.highlight).bg(bg),
                ));
            }
        } else {
            spans.push(Span::styled(
                " ".repeat(prefix_width),
                Style::default().bg(bg),
            ));
        }
        spans.push(Span::styled(text.clone(), title_style));

        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if line_idx == 0 && badge_width > 0 && content_width + badge_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width - badge_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                badges.clone(),
                Style::default().fg(app.theme.status_color(&issue.status)).bg(bg),
            ));
        } else if selected && content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
        lines.push(Line::from(spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::tui::app::{App, Msg};
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_labels() {
        assert_eq!(status_badge("open"), "OPEN");
        assert_eq!(status_badge("ready"), "READY");
        assert_eq!(status_badge("in_progress"), "WIP");
        assert_eq!(status_badge("blocked"), "BLKD");
        assert_eq!(status_badge("closed"), "DONE");
        assert_eq!(status_badge("deferred"), "");
    }

    #[test]
    fn badge_text_combines_priority_and_status() {
        let mut issue = Issue {
            status: "in_progress".into(),
            priority: 1,
            ..Default::default()
        };
        assert_eq!(badge_text(&issue), "P1 WIP");
        issue.priority = 0;
        assert_eq!(badge_text(&issue), "WIP");
        issue.status = "deferred".into();
        issue.priority = 2;
        assert_eq!(badge_text(&issue), "P2");
    }

    #[test]
    fn page_shrinks_when_titles_wrap() {
        use crate::data::Snapshot;
        use crate::model::SummaryCounts;

        let issues: Vec<Issue> = (0..6)
            .map(|i| Issue {
                id: format!("bd-{i:02}"),
                title: "a title long enough to wrap onto several lines".into(),
                status: "open".into(),
                issue_type: "task".into(),
                ..Default::default()
            })
            .collect();
        let mut app = App::new(&Config::default());
        let _ = app.update(Msg::Resize(40, 20));
        let _ = app.update(Msg::Data(Ok(Snapshot {
            issues,
            edges: Vec::new(),
            summary: SummaryCounts::default(),
        })));

        let wide = page_size(&app.columns[0], &app.collapsed, 120, 20);
        let narrow = page_size(&app.columns[0], &app.collapsed, 24, 20);
        assert_eq!(wide, nav::column_lines(20));
        assert!(narrow < wide);
        assert!(narrow >= 1);
    }
}
