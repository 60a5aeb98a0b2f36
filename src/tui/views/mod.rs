//! TUI Views module
//!
//! The three screens (dashboard, summary, register) plus the route tabs and
//! the status bar.

pub mod dashboard;
pub mod register;
pub mod resume;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{App, Route};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.route {
        Route::Dashboard => dashboard::render(frame, app, layout.main),
        Route::Resume => resume::render(frame, app, layout.main),
        Route::Register => register::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, route)| Line::from(format!("{} {}", i + 1, route.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" gofinances ")
                .title_style(theme.title_style())
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        )
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.route.index());

    frame.render_widget(tabs, area);
}
