//! Status bar view
//!
//! Shows the current screen, the summary month and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Route};

/// Key hints for a screen
pub fn hints(route: Route) -> &'static str {
    match route {
        Route::Dashboard => " j/k:Move  Tab:Next  q:Quit ",
        Route::Resume => " h/l:Month  Tab:Next  q:Quit ",
        Route::Register => " Enter:Send  Esc:Back  Ctrl+C:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        format!(" {} ", app.route.title()),
        Style::default()
            .fg(theme.title)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    if app.route == Route::Resume {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            app.selected_month.label(),
            Style::default().fg(theme.secondary),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(theme.secondary),
        ));
    }

    let hints = hints(app.route);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
