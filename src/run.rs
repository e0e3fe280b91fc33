use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::db::Database;
use crate::models::SUGGESTED_CATEGORIES;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(db: &Database) -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, db);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    db: &Database,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(5) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, db),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

/// Actions that touch the store report failure through the message bar; the
/// screen the user is on never changes because of an error.
fn run_action(app: &mut App, result: Result<()>) {
    if let Err(e) = result {
        app.set_status(format!("Error: {e}"));
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, db: &Database) {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.running = false;
        return;
    }

    match app.screen {
        Screen::Login | Screen::Register => handle_auth_input(key, app, db),
        Screen::History | Screen::Chart | Screen::Advice => handle_browse_input(key, app, db),
        Screen::AddEntry => handle_entry_input(key, app, db),
        Screen::Budget => handle_budget_input(key, app, db),
    }
}

fn handle_auth_input(key: event::KeyEvent, app: &mut App, db: &Database) {
    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen = if app.screen == Screen::Login {
                Screen::Register
            } else {
                Screen::Login
            };
            app.status_message.clear();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.auth_focus ^= 1;
        }
        KeyCode::Enter => {
            let result = if app.screen == Screen::Login {
                app.submit_login(db)
            } else {
                app.submit_register(db)
            };
            run_action(app, result);
        }
        KeyCode::Esc => {
            app.username_input.clear();
            app.password_input.clear();
            app.status_message.clear();
        }
        KeyCode::Backspace => {
            if app.auth_focus == 0 {
                app.username_input.pop();
            } else {
                app.password_input.pop();
            }
        }
        KeyCode::Char(c) => {
            if app.auth_focus == 0 {
                app.username_input.push(c);
            } else {
                app.password_input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_browse_input(key: event::KeyEvent, app: &mut App, db: &Database) {
    let page = app.visible_rows;
    match key.code {
        KeyCode::Char(c @ '1'..='5') => switch_by_digit(app, db, c),
        KeyCode::Tab => cycle_tab(app, db, true),
        KeyCode::BackTab => cycle_tab(app, db, false),
        KeyCode::Esc => app.request_sign_out(),
        KeyCode::Char('j') | KeyCode::Down if app.screen == Screen::History => {
            scroll_down(
                &mut app.record_index,
                &mut app.record_scroll,
                app.records.len(),
                page,
            );
        }
        KeyCode::Char('k') | KeyCode::Up if app.screen == Screen::History => {
            scroll_up(&mut app.record_index, &mut app.record_scroll);
        }
        KeyCode::Char('g') if app.screen == Screen::History => {
            scroll_to_top(&mut app.record_index, &mut app.record_scroll);
        }
        KeyCode::Char('G') if app.screen == Screen::History => {
            scroll_to_bottom(
                &mut app.record_index,
                &mut app.record_scroll,
                app.records.len(),
                page,
            );
        }
        _ => {}
    }
}

fn handle_entry_input(key: event::KeyEvent, app: &mut App, db: &Database) {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => {
            app.entry_focus = app.entry_focus.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.entry_focus = (app.entry_focus + 1).min(2);
        }
        KeyCode::Enter => {
            let result = app.save_entry(db);
            run_action(app, result);
        }
        KeyCode::Esc => app.request_sign_out(),
        KeyCode::Backspace if app.entry_focus == 2 => {
            app.entry_amount.pop();
        }
        KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Char('=') if app.entry_focus < 2 => {
            if app.entry_focus == 0 {
                app.entry_kind = app.entry_kind.toggle();
            } else {
                app.entry_category = (app.entry_category + 1) % SUGGESTED_CATEGORIES.len();
            }
        }
        KeyCode::Char('-') if app.entry_focus < 2 => {
            if app.entry_focus == 0 {
                app.entry_kind = app.entry_kind.toggle();
            } else {
                app.entry_category = (app.entry_category + SUGGESTED_CATEGORIES.len() - 1)
                    % SUGGESTED_CATEGORIES.len();
            }
        }
        KeyCode::Char(c) if app.entry_focus == 2 && (c.is_ascii_digit() || c == '.') => {
            app.entry_amount.push(c);
        }
        // Screen switching by digit only while the amount field is not focused
        KeyCode::Char(c @ '1'..='5') if app.entry_focus != 2 => switch_by_digit(app, db, c),
        _ => {}
    }
}

fn handle_budget_input(key: event::KeyEvent, app: &mut App, db: &Database) {
    match key.code {
        KeyCode::Tab => cycle_tab(app, db, true),
        KeyCode::BackTab => cycle_tab(app, db, false),
        KeyCode::Enter => {
            let result = app.save_budget(db);
            run_action(app, result);
        }
        KeyCode::Esc => app.request_sign_out(),
        KeyCode::Backspace => {
            app.budget_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.budget_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.sign_out(),
        _ => app.set_status("Cancelled"),
    }
}

// ── Screen switching ─────────────────────────────────────────

fn switch_by_digit(app: &mut App, db: &Database, digit: char) {
    let target = match digit {
        '1' => Screen::History,
        '2' => Screen::AddEntry,
        '3' => Screen::Chart,
        '4' => Screen::Budget,
        _ => Screen::Advice,
    };
    switch_screen(app, db, target);
}

fn cycle_tab(app: &mut App, db: &Database, forward: bool) {
    let tabs = Screen::tabs();
    let current = tabs.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = if forward {
        (current + 1) % tabs.len()
    } else {
        (current + tabs.len() - 1) % tabs.len()
    };
    switch_screen(app, db, tabs[next]);
}

fn switch_screen(app: &mut App, db: &Database, target: Screen) {
    app.screen = target;
    app.status_message.clear();
    let result = match target {
        Screen::History => app.refresh_records(db),
        Screen::Chart | Screen::Advice => app.refresh_summary(db),
        Screen::Budget => {
            app.budget_input = app
                .session
                .as_ref()
                .map(|s| s.budget.to_string())
                .unwrap_or_default();
            Ok(())
        }
        _ => Ok(()),
    };
    run_action(app, result);
}
