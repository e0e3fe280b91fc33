use anyhow::Result;
use rust_decimal::Decimal;

use crate::auth;
use crate::db::{Database, RegisterOutcome};
use crate::models::{Record, RecordKind, SUGGESTED_CATEGORIES};
use crate::ui::util::{parse_amount, parse_budget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Login,
    Register,
    History,
    AddEntry,
    Chart,
    Budget,
    Advice,
}

impl Screen {
    /// The signed-in tab strip, in keybinding order (1 through 5).
    pub(crate) fn tabs() -> &'static [Screen] {
        &[
            Screen::History,
            Screen::AddEntry,
            Screen::Chart,
            Screen::Budget,
            Screen::Advice,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Login => "Sign In",
            Screen::Register => "Register",
            Screen::History => "History",
            Screen::AddEntry => "Add Entry",
            Screen::Chart => "Chart",
            Screen::Budget => "Budget",
            Screen::Advice => "Advice",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Normal => write!(f, "NORMAL"),
            InputMode::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// The signed-in user. Carried explicitly on the [`App`] so every action
/// that needs the current username or budget takes it from here.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) username: String,
    pub(crate) budget: Decimal,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) confirm_message: String,
    pub(crate) session: Option<Session>,

    // Sign-in / register form (0 = username, 1 = password)
    pub(crate) username_input: String,
    pub(crate) password_input: String,
    pub(crate) auth_focus: usize,

    // History list
    pub(crate) records: Vec<Record>,
    pub(crate) record_index: usize,
    pub(crate) record_scroll: usize,
    pub(crate) visible_rows: usize,

    // Add-entry form (0 = kind, 1 = category, 2 = amount)
    pub(crate) entry_kind: RecordKind,
    pub(crate) entry_category: usize,
    pub(crate) entry_amount: String,
    pub(crate) entry_focus: usize,

    // Budget form
    pub(crate) budget_input: String,

    // Expense totals per category, largest first
    pub(crate) summary: Vec<(String, Decimal)>,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Login,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            confirm_message: String::new(),
            session: None,
            username_input: String::new(),
            password_input: String::new(),
            auth_focus: 0,
            records: Vec::new(),
            record_index: 0,
            record_scroll: 0,
            visible_rows: 20,
            entry_kind: RecordKind::Expense,
            entry_category: 0,
            entry_amount: String::new(),
            entry_focus: 0,
            budget_input: String::new(),
            summary: Vec::new(),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn refresh_records(&mut self, db: &Database) -> Result<()> {
        if let Some(session) = &self.session {
            self.records = db.list_records(&session.username)?;
            if self.record_index >= self.records.len() {
                self.record_index = self.records.len().saturating_sub(1);
            }
            if self.record_scroll > self.record_index {
                self.record_scroll = self.record_index;
            }
        }
        Ok(())
    }

    pub(crate) fn refresh_summary(&mut self, db: &Database) -> Result<()> {
        if let Some(session) = &self.session {
            self.summary = db.expense_summary(&session.username)?;
        }
        Ok(())
    }

    pub(crate) fn submit_login(&mut self, db: &Database) -> Result<()> {
        let username = self.username_input.trim().to_string();
        let password = self.password_input.clone();
        if username.is_empty() || password.is_empty() {
            self.set_status("Username and password are required");
            return Ok(());
        }
        match db.get_user(&username)? {
            Some(user) if auth::verify_password(&password, &user.password_hash) => {
                self.budget_input = if user.has_budget() {
                    user.budget.to_string()
                } else {
                    String::new()
                };
                self.session = Some(Session {
                    username: user.username.clone(),
                    budget: user.budget,
                });
                self.password_input.clear();
                self.screen = Screen::History;
                self.refresh_records(db)?;
                self.set_status(format!("Signed in as {}", user.username));
            }
            _ => self.set_status("Invalid username or password"),
        }
        Ok(())
    }

    pub(crate) fn submit_register(&mut self, db: &Database) -> Result<()> {
        let username = self.username_input.trim().to_string();
        let password = self.password_input.clone();
        if username.is_empty() || password.is_empty() {
            self.set_status("Both fields are required to register");
            return Ok(());
        }
        let hash = auth::hash_password(&password)?;
        match db.register(&username, &hash)? {
            RegisterOutcome::Created => {
                self.password_input.clear();
                self.screen = Screen::Login;
                self.set_status("Account created. Sign in to continue.");
            }
            RegisterOutcome::DuplicateUsername => {
                self.set_status(format!("Username '{username}' is already taken"));
            }
        }
        Ok(())
    }

    pub(crate) fn save_entry(&mut self, db: &Database) -> Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let Some(amount) = parse_amount(&self.entry_amount) else {
            self.set_status("Enter a valid positive amount");
            return Ok(());
        };
        let category = SUGGESTED_CATEGORIES
            .get(self.entry_category)
            .copied()
            .unwrap_or("Other")
            .to_string();
        let record = Record::new(session.username.clone(), self.entry_kind, category, amount);
        db.add_record(&record)?;
        self.entry_amount.clear();
        self.screen = Screen::History;
        self.refresh_records(db)?;
        self.set_status("Entry saved");
        Ok(())
    }

    pub(crate) fn save_budget(&mut self, db: &Database) -> Result<()> {
        let Some(amount) = parse_budget(&self.budget_input) else {
            self.set_status("Enter a numeric budget");
            return Ok(());
        };
        let username = match &self.session {
            Some(session) => session.username.clone(),
            None => return Ok(()),
        };
        db.set_budget(&username, amount)?;
        if let Some(session) = self.session.as_mut() {
            session.budget = amount;
        }
        self.budget_input = amount.to_string();
        self.screen = Screen::Advice;
        self.refresh_summary(db)?;
        self.set_status("Monthly budget updated");
        Ok(())
    }

    /// Signing out always goes through a confirm prompt first.
    pub(crate) fn request_sign_out(&mut self) {
        self.input_mode = InputMode::Confirm;
        self.confirm_message = "Sign out?".to_string();
    }

    pub(crate) fn sign_out(&mut self) {
        self.session = None;
        self.records.clear();
        self.summary.clear();
        self.username_input.clear();
        self.password_input.clear();
        self.entry_amount.clear();
        self.budget_input.clear();
        self.auth_focus = 0;
        self.entry_focus = 0;
        self.record_index = 0;
        self.record_scroll = 0;
        self.screen = Screen::Login;
        self.set_status("Signed out");
    }
}
