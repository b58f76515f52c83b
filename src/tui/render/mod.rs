pub mod detail_view;
pub mod drawer;
pub mod help_overlay;
pub mod navbar;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::nav;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar | summary | body | key hints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    navbar::render_navbar(frame, app, chunks[0]);
    navbar::render_summary(frame, app, chunks[1]);

    // Body: issue drawer on the left, detail pane on the right
    let body = chunks[2];
    let layout = nav::drawer_layout(body.width as usize, area.height as usize);
    let drawer_area = Rect {
        width: (layout.drawer_width as u16).min(body.width),
        ..body
    };
    drawer::render_drawer(frame, app, drawer_area);

    if layout.detail_width > 0 {
        let detail_area = Rect {
            x: body.x + (layout.drawer_width + layout.gap) as u16,
            y: body.y,
            width: layout.detail_width as u16,
            height: body.height,
        };
        detail_view::render_detail(frame, app, detail_area);
    }

    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
