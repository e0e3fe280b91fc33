pub(crate) mod add_entry;
pub(crate) mod advice;
pub(crate) mod budget;
pub(crate) mod chart;
pub(crate) mod history;
pub(crate) mod login;
pub(crate) mod register;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::ui::theme;

/// A fixed-size rect centered in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// One labeled form row, highlighted when it holds focus.
pub(crate) fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        theme::focus_style()
    } else {
        theme::normal_style()
    };
    Line::from(vec![
        Span::styled(marker.to_string(), theme::focus_style()),
        Span::styled(format!("{label:<10}"), theme::dim_style()),
        Span::styled(value.to_string(), value_style),
        Span::styled(if focused { "▏" } else { "" }, theme::focus_style()),
    ])
}
