#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── RecordKind ────────────────────────────────────────────────

#[test]
fn test_kind_roundtrip() {
    assert_eq!(RecordKind::parse("income"), RecordKind::Income);
    assert_eq!(RecordKind::parse("expense"), RecordKind::Expense);
    assert_eq!(RecordKind::parse(RecordKind::Income.as_str()), RecordKind::Income);
    assert_eq!(RecordKind::parse(RecordKind::Expense.as_str()), RecordKind::Expense);
}

#[test]
fn test_kind_parse_case_insensitive() {
    assert_eq!(RecordKind::parse("Income"), RecordKind::Income);
    assert_eq!(RecordKind::parse("EXPENSE"), RecordKind::Expense);
}

#[test]
fn test_kind_parse_unknown_defaults_to_expense() {
    assert_eq!(RecordKind::parse("transfer"), RecordKind::Expense);
    assert_eq!(RecordKind::parse(""), RecordKind::Expense);
}

#[test]
fn test_kind_toggle() {
    assert_eq!(RecordKind::Income.toggle(), RecordKind::Expense);
    assert_eq!(RecordKind::Expense.toggle(), RecordKind::Income);
}

#[test]
fn test_kind_display() {
    assert_eq!(RecordKind::Income.to_string(), "Income");
    assert_eq!(RecordKind::Expense.to_string(), "Expense");
}

// ── Record ────────────────────────────────────────────────────

#[test]
fn test_record_new_stamps_today() {
    let record = Record::new(
        "alice".into(),
        RecordKind::Expense,
        "Dining".into(),
        dec!(12.50),
    );
    assert!(record.id.is_none());
    assert!(record.is_expense());
    assert!(!record.is_income());
    // YYYY-MM-DD
    assert_eq!(record.date.len(), 10);
    assert_eq!(record.date.as_bytes()[4], b'-');
    assert_eq!(record.date.as_bytes()[7], b'-');
}

#[test]
fn test_record_income_kind() {
    let record = Record::new(
        "alice".into(),
        RecordKind::Income,
        "Salary".into(),
        dec!(3000),
    );
    assert!(record.is_income());
    assert!(!record.is_expense());
}

// ── User ──────────────────────────────────────────────────────

#[test]
fn test_user_budget_zero_means_unset() {
    let mut user = User {
        username: "alice".into(),
        password_hash: "hash".into(),
        budget: dec!(0),
    };
    assert!(!user.has_budget());
    user.budget = dec!(400);
    assert!(user.has_budget());
    user.budget = dec!(0);
    assert!(!user.has_budget());
}

#[test]
fn test_suggested_categories_nonempty() {
    assert!(!SUGGESTED_CATEGORIES.is_empty());
    assert!(SUGGESTED_CATEGORIES.contains(&"Other"));
}
