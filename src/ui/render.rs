use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::app::{App, InputMode, Screen};
use crate::ui::screens;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_message_bar(f, chunks[3], app);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Login => screens::login::render(f, area, app),
        Screen::Register => screens::register::render(f, area, app),
        Screen::History => screens::history::render(f, area, app),
        Screen::AddEntry => screens::add_entry::render(f, area, app),
        Screen::Chart => screens::chart::render(f, area, app),
        Screen::Budget => screens::budget::render(f, area, app),
        Screen::Advice => screens::advice::render(f, area, app),
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    if app.session.is_none() {
        let title = Paragraph::new(Line::from(Span::styled(
            "  fintui · personal finance tracker",
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(theme::HEADER_BG));
        f.render_widget(title, area);
        return;
    }

    let mut spans = vec![Span::styled(" ", Style::default().bg(theme::HEADER_BG))];
    for (i, screen) in Screen::tabs().iter().enumerate() {
        let label = format!(" {} {} ", i + 1, screen);
        let style = if *screen == app.screen {
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::styled(" ", Style::default().bg(theme::HEADER_BG)));
    }
    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode = format!(" {} ", app.input_mode);
    let info = match &app.session {
        Some(session) => format!(
            " {} | {} | {} entries ",
            app.screen,
            session.username,
            app.records.len()
        ),
        None => format!(" {} ", app.screen),
    };
    let hints = key_hints(app.screen);

    let used = mode.len() + info.len() + hints.len();
    let pad = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(hints, theme::status_bar_style()),
    ]);
    f.render_widget(
        Paragraph::new(line).style(theme::status_bar_style()),
        area,
    );
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => " Tab field | Enter sign in | Ctrl-n register | Ctrl-q quit ",
        Screen::Register => " Tab field | Enter create | Ctrl-n back | Ctrl-q quit ",
        Screen::History => " j/k scroll | g/G ends | 1-5 screens | Esc sign out ",
        Screen::AddEntry => " Up/Down field | Space cycle | Enter save | Esc sign out ",
        Screen::Chart => " 1-5 screens | Tab next | Esc sign out ",
        Screen::Budget => " type amount | Enter save | Tab next | Esc sign out ",
        Screen::Advice => " 1-5 screens | Tab next | Esc sign out ",
    }
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Confirm => Line::from(vec![
            Span::styled(
                format!(" {} ", app.confirm_message),
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("[y/N]", Style::default().fg(theme::TEXT_DIM)),
        ]),
        InputMode::Normal if !app.status_message.is_empty() => Line::from(Span::styled(
            format!(" {}", app.status_message),
            Style::default().fg(theme::TEXT),
        )),
        InputMode::Normal => Line::from(Span::styled(
            " Ctrl-q to quit",
            Style::default().fg(theme::OVERLAY),
        )),
    };
    f.render_widget(Paragraph::new(line).style(theme::message_bar_style()), area);
}
