use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::form::FormField;
use crate::ui::theme;

const LABEL_WIDTH: usize = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let active = app.input_mode == InputMode::Form;

    let (title, subtitle) = match form.editing {
        Some(_) => (" Edit Expense ", "Update your expense details"),
        None => (" Add New Expense ", "Track your daily expenses"),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(format!("  {subtitle}"), theme::dim_style())),
        Line::from(""),
    ];

    for &field in FormField::all() {
        let focused = active && form.focus == field;
        let marker = if focused { "▶ " } else { "  " };
        let label = format!("{marker}{:<width$}", field.label(), width = LABEL_WIDTH);
        let value = match field {
            FormField::Category => format!("◀ {} ▶", form.value(field)),
            _ if focused => format!("{}▏", form.value(field)),
            _ => form.value(field),
        };
        let value_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::normal_style()
        };

        lines.push(Line::from(vec![
            Span::styled(label, theme::dim_style()),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }

    let hint = if active {
        "  Tab/↑↓ field | ←/→ or +/- category | Enter save | Esc cancel"
    } else {
        "  Press Enter or i to start typing"
    };
    lines.push(Line::from(Span::styled(hint, theme::dim_style())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active {
            theme::ACCENT
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(title, theme::panel_title_style()));

    f.render_widget(Paragraph::new(lines).block(block), chunks[0]);
}
