use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, percentage_bar};

const BAR_WIDTH: usize = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(6),    // Category breakdown
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_category_breakdown(f, chunks[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let overview = &app.overview;
    let month_label = app.month.format("%B %Y").to_string();

    render_card(
        f,
        cards[0],
        "Total Expenses",
        format_amount(overview.total, &app.currency),
        theme::ACCENT,
        "all time".to_string(),
    );
    render_card(
        f,
        cards[1],
        "This Month",
        format_amount(overview.month_total, &app.currency),
        theme::PEACH,
        month_label,
    );
    render_card(
        f,
        cards[2],
        "Total Records",
        overview.record_count.to_string(),
        theme::GREEN,
        "expenses".to_string(),
    );
    render_card(
        f,
        cards[3],
        "Month Records",
        overview.month_count.to_string(),
        theme::YELLOW,
        "this month".to_string(),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: ratatui::style::Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::panel_title_style()));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Category Breakdown ",
            theme::panel_title_style(),
        ));

    if app.overview.categories.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press 3 to open the form or use :add",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header = Row::new(
        ["Category", "Count", "Total", "Share", ""]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    );

    let rows: Vec<Row> = app
        .overview
        .categories
        .iter()
        .map(|summary| {
            let color = theme::category_color(summary.category);
            Row::new(vec![
                Cell::from(summary.category.label()),
                Cell::from(summary.count.to_string()),
                Cell::from(format_amount(summary.total, &app.currency)),
                Cell::from(format!("{:.1}%", summary.rounded_percentage(1))),
                Cell::from(Span::styled(
                    percentage_bar(summary.percentage, BAR_WIDTH),
                    Style::default().fg(color),
                )),
            ])
            .style(theme::normal_style())
        })
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Length(7),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(BAR_WIDTH as u16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
