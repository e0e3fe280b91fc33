use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::screens::{centered_rect, field_line};
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(46, 9, area);
    f.render_widget(Clear, popup);

    let current = match &app.session {
        Some(session) if session.budget > rust_decimal::Decimal::ZERO => {
            format_amount(session.budget)
        }
        _ => "not set".to_string(),
    };

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Current:   ", theme::dim_style()),
            Span::styled(current, theme::normal_style()),
        ]),
        field_line("New budget", &app.budget_input, true),
        Line::raw(""),
        Line::styled("  Enter to save · 0 clears the ceiling", theme::dim_style()),
    ];

    let block = Block::default()
        .title(" Monthly Budget ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::dim_style());
    f.render_widget(
        Paragraph::new(lines).style(theme::normal_style()).block(block),
        popup,
    );
}
