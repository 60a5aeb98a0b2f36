//! Dashboard view
//!
//! Highlight cards for income, outcome and balance above the transaction
//! history.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::report::truncate;
use crate::reports::HighlightCard;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = DashboardLayout::new(area);
    let theme = &app.theme;

    let Some(dashboard) = app.dashboard.as_ref() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false));
        frame.render_widget(
            Paragraph::new("Loading...")
                .block(block)
                .style(Style::default().fg(theme.muted)),
            area,
        );
        return;
    };

    let cards = [
        ("Income", &dashboard.highlights.entries, theme.success),
        ("Outcome", &dashboard.highlights.expenses, theme.attention),
        ("Total", &dashboard.highlights.total, theme.primary),
    ];
    for ((title, card, color), rect) in cards.into_iter().zip(layout.cards) {
        render_card(frame, app, title, card, color, rect);
    }

    render_history(frame, app, layout.history);
}

fn render_card(
    frame: &mut Frame,
    app: &App,
    title: &str,
    card: &HighlightCard,
    color: ratatui::style::Color,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = vec![
        Line::from(Span::styled(
            card.amount_formatted.as_str(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.last_transaction.as_str(),
            Style::default().fg(app.theme.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Listing ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));

    let history = app
        .dashboard
        .as_ref()
        .map(|d| d.history.as_slice())
        .unwrap_or_default();

    if history.is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions yet. Press 3 to register one.")
                .block(block)
                .style(Style::default().fg(theme.muted)),
            area,
        );
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Name").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Date").style(bold),
    ])
    .style(Style::default().fg(theme.title))
    .bottom_margin(1);

    let rows: Vec<Row> = history
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(truncate(&entry.name, 30)),
                Cell::from(entry.amount_formatted.as_str())
                    .style(Style::default().fg(theme.amount_color(entry.kind))),
                Cell::from(entry.category_name.as_str()).style(
                    Style::default().fg(theme.category_color(&entry.category_key)),
                ),
                Cell::from(entry.date_formatted.as_str())
                    .style(Style::default().fg(theme.muted)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_history_index));

    frame.render_stateful_widget(table, area, &mut state);
}
