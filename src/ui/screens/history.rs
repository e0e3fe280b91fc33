use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.records.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  No entries yet.", theme::dim_style()),
            Line::styled(
                "  Record income or an expense from the Add Entry screen (2).",
                theme::dim_style(),
            ),
        ])
        .block(Block::default().title(" History ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        ["Date", "Kind", "Category", "Amount"]
            .into_iter()
            .map(Cell::from),
    )
    .style(theme::header_style())
    .height(1);

    let page = app.visible_rows;
    let rows = app
        .records
        .iter()
        .enumerate()
        .skip(app.record_scroll)
        .take(page)
        .map(|(i, record)| {
            let kind_style = if record.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };
            let sign = if record.is_expense() { "-" } else { "+" };
            let cells = vec![
                Cell::from(record.date.clone()),
                Cell::from(Span::styled(record.kind.to_string(), kind_style)),
                Cell::from(truncate(&record.category, 24)),
                Cell::from(Span::styled(
                    format!("{sign}{}", format_amount(record.amount)),
                    kind_style,
                )),
            ];
            let row = Row::new(cells);
            if i == app.record_index {
                row.style(theme::selected_style())
            } else if i % 2 == 1 {
                row.style(theme::alt_row_style())
            } else {
                row.style(theme::normal_style())
            }
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Percentage(50),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" History ({}) ", app.records.len()))
            .borders(Borders::ALL)
            .border_style(theme::dim_style()),
    );
    f.render_widget(table, area);
}
