use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use rust_decimal::Decimal;

use crate::report;
use crate::ui::app::App;
use crate::ui::screens::centered_rect;
use crate::ui::theme;
use crate::ui::util::format_amount;

/// Spend against the monthly budget, with the over/within verdict.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let budget = app
        .session
        .as_ref()
        .map(|s| s.budget)
        .unwrap_or(Decimal::ZERO);
    let status = report::budget_status(&app.summary, budget);

    let popup = centered_rect(56, 11, area);
    f.render_widget(Clear, popup);

    let budget_value = if status.budget > Decimal::ZERO {
        format_amount(status.budget)
    } else {
        "not set".to_string()
    };
    let (headline, headline_style) = if status.over {
        (
            "OVER BUDGET",
            Style::default()
                .fg(theme::RED)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "WITHIN BUDGET",
            Style::default()
                .fg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Total spent:     ", theme::dim_style()),
            Span::styled(format_amount(status.total_expense), theme::normal_style()),
        ]),
        Line::from(vec![
            Span::styled("  Monthly budget:  ", theme::dim_style()),
            Span::styled(budget_value, theme::normal_style()),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(headline, headline_style),
        ]),
        Line::raw(""),
        Line::styled(format!("  {}", status.verdict()), theme::dim_style()),
    ];

    let block = Block::default()
        .title(" Advice ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::dim_style());
    f.render_widget(
        Paragraph::new(lines).style(theme::normal_style()).block(block),
        popup,
    );
}
