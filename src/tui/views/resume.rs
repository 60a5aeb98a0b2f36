//! Summary view
//!
//! Month selector, a horizontal bar chart of the month's expenses by
//! category and the matching coloured list of totals.

use ratatui::{
    layout::{Alignment, Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::reports::ResumeReport;
use crate::tui::app::App;
use crate::tui::layout::ResumeLayout;

/// Render the summary view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ResumeLayout::new(area);

    render_month_selector(frame, app, layout.month_selector);

    match app.resume.as_ref() {
        Some(report) if !report.is_empty() => {
            render_chart(frame, app, report, layout.chart);
            render_list(frame, app, report, layout.list);
        }
        Some(_) => render_empty(frame, app, "No expenses this month.", layout.chart, layout.list),
        None => render_empty(frame, app, "Loading...", layout.chart, layout.list),
    }
}

fn render_month_selector(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled("◀ h  ", Style::default().fg(theme.muted)),
        Span::styled(app.selected_month.label(), theme.title_style()),
        Span::styled("  l ▶", Style::default().fg(theme.muted)),
    ]);

    let block = Block::default()
        .title(" Summary by category ")
        .title_style(theme.title_style())
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_chart(frame: &mut Frame, app: &App, report: &ResumeReport, area: Rect) {
    let theme = &app.theme;
    let bars: Vec<Bar> = report
        .categories
        .iter()
        .map(|category| {
            let color = theme.category_color(&category.key);
            Bar::default()
                .value(u64::from(category.percent_value()))
                .label(Line::from(category.name.clone()))
                .text_value(category.percent.clone())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::White).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(100)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_list(frame: &mut Frame, app: &App, report: &ResumeReport, area: Rect) {
    let theme = &app.theme;
    let mut items: Vec<ListItem> = report
        .categories
        .iter()
        .map(|category| {
            ListItem::new(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(theme.category_color(&category.key))),
                Span::styled(format!("{:<12}", category.name), Style::default().fg(theme.title)),
                Span::styled(
                    category.total_formatted.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    items.push(ListItem::new(Line::from("")));
    items.push(ListItem::new(Line::from(vec![
        Span::styled("  Total       ", Style::default().fg(theme.muted)),
        Span::styled(
            app.currency.format(report.total_expenses),
            Style::default()
                .fg(theme.attention)
                .add_modifier(Modifier::BOLD),
        ),
    ])));

    let list = List::new(items).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(theme.border_style(false)),
    );

    frame.render_widget(list, area);
}

fn render_empty(frame: &mut Frame, app: &App, message: &str, chart: Rect, list: Rect) {
    let theme = &app.theme;
    let block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
    };
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(block()),
        chart,
    );
    frame.render_widget(Paragraph::new("").block(block()), list);
}
