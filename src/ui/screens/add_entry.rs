use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::models::SUGGESTED_CATEGORIES;
use crate::ui::app::App;
use crate::ui::screens::{centered_rect, field_line};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(48, 10, area);
    f.render_widget(Clear, popup);

    let category = SUGGESTED_CATEGORIES
        .get(app.entry_category)
        .copied()
        .unwrap_or("Other");
    let lines = vec![
        Line::raw(""),
        field_line("Kind", &format!("‹ {} ›", app.entry_kind), app.entry_focus == 0),
        field_line("Category", &format!("‹ {category} ›"), app.entry_focus == 1),
        field_line("Amount", &app.entry_amount, app.entry_focus == 2),
        Line::raw(""),
        Line::styled(
            "  Space or +/- cycles · Enter saves the entry",
            theme::dim_style(),
        ),
    ];

    let block = Block::default()
        .title(" Add Entry ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::dim_style());
    f.render_widget(
        Paragraph::new(lines).style(theme::normal_style()).block(block),
        popup,
    );
}
