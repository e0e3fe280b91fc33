use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::screens::{centered_rect, field_line};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(46, 9, area);
    f.render_widget(Clear, popup);

    let masked = "*".repeat(app.password_input.chars().count());
    let lines = vec![
        Line::raw(""),
        field_line("Username", &app.username_input, app.auth_focus == 0),
        field_line("Password", &masked, app.auth_focus == 1),
        Line::raw(""),
        Line::styled("  Enter to sign in · Ctrl-n to register", theme::dim_style()),
    ];

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::dim_style());
    f.render_widget(
        Paragraph::new(lines).style(theme::normal_style()).block(block),
        popup,
    );
}
