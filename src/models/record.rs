use chrono::Local;
use rust_decimal::Decimal;

/// Categories offered by the add-entry form. Free text is still accepted by
/// the store; this list is a suggestion, not a constraint.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Salary",
    "Dining",
    "Transport",
    "Shopping",
    "Entertainment",
    "Medical",
    "Housing",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub id: Option<i64>,
    pub username: String,
    pub kind: RecordKind,
    pub category: String,
    pub amount: Decimal,
    /// Format: "YYYY-MM-DD"
    pub date: String,
}

impl Record {
    /// New record stamped with today's date.
    pub fn new(username: String, kind: RecordKind, category: String, amount: Decimal) -> Self {
        Self {
            id: None,
            username,
            kind,
            category,
            amount,
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }
}
