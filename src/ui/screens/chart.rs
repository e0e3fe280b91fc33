use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::report;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

/// Expense breakdown by category, each bar labeled with its share of the
/// total in percent.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let slices = report::chart_shares(&app.summary);
    if slices.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled("  No expense data to chart yet.", theme::dim_style()),
            Line::styled(
                "  Save an expense from the Add Entry screen (2).",
                theme::dim_style(),
            ),
        ])
        .block(
            Block::default()
                .title(" Expense Share by Category ")
                .borders(Borders::ALL),
        );
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = slices
        .iter()
        .map(|slice| {
            Bar::default()
                .label(Line::from(truncate(&slice.category, 10)))
                .value(slice.share.round() as u64)
                .text_value(format!("{:.1}%", slice.share))
                .style(Style::default().fg(theme::RED))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(theme::RED))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Expense Share by Category ")
                .borders(Borders::ALL)
                .border_style(theme::dim_style()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2)
        .max(100);
    f.render_widget(chart, area);
}
