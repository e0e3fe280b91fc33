#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn make_record(username: &str, kind: RecordKind, category: &str, amount: Decimal) -> Record {
    Record {
        id: None,
        username: username.into(),
        kind,
        category: category.into(),
        amount,
        date: "2024-03-10".into(),
    }
}

fn register_alice(db: &Database) {
    let outcome = db.register("alice", "hash-a").unwrap();
    assert_eq!(outcome, RegisterOutcome::Created);
}

// ── Registration ──────────────────────────────────────────────

#[test]
fn test_register_new_user() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    let user = db.get_user("alice").unwrap().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "hash-a");
    assert_eq!(user.budget, dec!(0));
}

#[test]
fn test_register_duplicate_username() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    let second = db.register("alice", "hash-b").unwrap();
    assert_eq!(second, RegisterOutcome::DuplicateUsername);
    // User count unchanged, original hash untouched
    assert_eq!(db.user_count().unwrap(), 1);
    let user = db.get_user("alice").unwrap().unwrap();
    assert_eq!(user.password_hash, "hash-a");
}

#[test]
fn test_get_user_not_found() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_user("nobody").unwrap().is_none());
}

#[test]
fn test_user_count() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.user_count().unwrap(), 0);
    db.register("alice", "h1").unwrap();
    db.register("bob", "h2").unwrap();
    assert_eq!(db.user_count().unwrap(), 2);
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_set_budget_overwrites() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.set_budget("alice", dec!(400)).unwrap();
    assert_eq!(db.get_user("alice").unwrap().unwrap().budget, dec!(400));

    db.set_budget("alice", dec!(250.50)).unwrap();
    assert_eq!(db.get_user("alice").unwrap().unwrap().budget, dec!(250.50));
}

#[test]
fn test_set_budget_no_validation() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    // The store applies whatever it is given, including negatives and zero
    db.set_budget("alice", dec!(-10)).unwrap();
    assert_eq!(db.get_user("alice").unwrap().unwrap().budget, dec!(-10));
    db.set_budget("alice", dec!(0)).unwrap();
    assert_eq!(db.get_user("alice").unwrap().unwrap().budget, dec!(0));
}

// ── Records ───────────────────────────────────────────────────

#[test]
fn test_add_and_list_records() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    let id = db
        .add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(12.50)))
        .unwrap();
    assert!(id > 0);

    let records = db.list_records("alice").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "Dining");
    assert_eq!(records[0].amount, dec!(12.50));
    assert!(records[0].is_expense());
}

#[test]
fn test_list_records_date_descending() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    for (date, amount) in [
        ("2024-01-05", dec!(10)),
        ("2024-03-20", dec!(20)),
        ("2024-02-11", dec!(30)),
        ("2024-03-20", dec!(40)),
    ] {
        let mut record = make_record("alice", RecordKind::Expense, "Other", amount);
        record.date = date.into();
        db.add_record(&record).unwrap();
    }

    let records = db.list_records("alice").unwrap();
    assert_eq!(records.len(), 4);
    for window in records.windows(2) {
        assert!(window[0].date >= window[1].date);
    }
}

#[test]
fn test_list_records_scoped_to_user() {
    let db = Database::open_in_memory().unwrap();
    db.register("alice", "h1").unwrap();
    db.register("bob", "h2").unwrap();

    db.add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(5)))
        .unwrap();
    db.add_record(&make_record("bob", RecordKind::Expense, "Transport", dec!(7)))
        .unwrap();

    let alice = db.list_records("alice").unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].category, "Dining");
    assert_eq!(db.record_count("bob").unwrap(), 1);
}

#[test]
fn test_store_accepts_non_positive_amounts() {
    // Amount validation is the controller's job (ui::util::parse_amount);
    // the store itself takes what it is given.
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.add_record(&make_record("alice", RecordKind::Expense, "Other", dec!(-5)))
        .unwrap();
    db.add_record(&make_record("alice", RecordKind::Expense, "Other", dec!(0)))
        .unwrap();
    assert_eq!(db.record_count("alice").unwrap(), 2);
}

#[test]
fn test_record_for_unknown_user_rejected() {
    let db = Database::open_in_memory().unwrap();
    // No users registered: the FK on records.username rejects the insert
    let result = db.add_record(&make_record("ghost", RecordKind::Expense, "Other", dec!(1)));
    assert!(result.is_err());
}

// ── Expense summary ───────────────────────────────────────────

#[test]
fn test_expense_summary_adds_exact_amount() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(30)))
        .unwrap();
    let before = db.expense_summary("alice").unwrap();
    let dining_before = before
        .iter()
        .find(|(c, _)| c == "Dining")
        .map(|(_, amt)| *amt)
        .unwrap();

    db.add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(12.50)))
        .unwrap();
    let after = db.expense_summary("alice").unwrap();
    let dining_after = after
        .iter()
        .find(|(c, _)| c == "Dining")
        .map(|(_, amt)| *amt)
        .unwrap();

    assert_eq!(dining_after, dining_before + dec!(12.50));
}

#[test]
fn test_expense_summary_excludes_income() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.add_record(&make_record("alice", RecordKind::Income, "Salary", dec!(3000)))
        .unwrap();
    db.add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(25)))
        .unwrap();

    let summary = db.expense_summary("alice").unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].0, "Dining");
    assert_eq!(summary[0].1, dec!(25));
}

#[test]
fn test_expense_summary_groups_by_category() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(10)))
        .unwrap();
    db.add_record(&make_record("alice", RecordKind::Expense, "Dining", dec!(15)))
        .unwrap();
    db.add_record(&make_record("alice", RecordKind::Expense, "Transport", dec!(40)))
        .unwrap();

    let summary = db.expense_summary("alice").unwrap();
    assert_eq!(summary.len(), 2);
    // Largest total first
    assert_eq!(summary[0], ("Transport".into(), dec!(40)));
    assert_eq!(summary[1], ("Dining".into(), dec!(25)));
}

#[test]
fn test_expense_summary_empty_when_no_expenses() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);
    assert!(db.expense_summary("alice").unwrap().is_empty());

    db.add_record(&make_record("alice", RecordKind::Income, "Salary", dec!(100)))
        .unwrap();
    assert!(db.expense_summary("alice").unwrap().is_empty());
}

// ── End to end ────────────────────────────────────────────────

#[test]
fn test_register_then_authenticate_flow() {
    let db = Database::open_in_memory().unwrap();

    assert_eq!(db.register("alice", "pw1-hash").unwrap(), RegisterOutcome::Created);
    assert_eq!(
        db.register("alice", "pw2-hash").unwrap(),
        RegisterOutcome::DuplicateUsername
    );

    // Lookup succeeds and returns the stored tuple for verification
    let user = db.get_user("alice").unwrap().unwrap();
    assert_eq!(user.password_hash, "pw1-hash");

    // Unknown user is a clean miss, not an error
    assert!(db.get_user("mallory").unwrap().is_none());
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_open_on_disk_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintui.db");

    {
        let db = Database::open(&path).unwrap();
        db.register("alice", "h").unwrap();
        db.set_budget("alice", dec!(300)).unwrap();
    }

    // Reopening runs migrate() again against the existing schema
    let db = Database::open(&path).unwrap();
    let user = db.get_user("alice").unwrap().unwrap();
    assert_eq!(user.budget, dec!(300));
    assert_eq!(db.user_count().unwrap(), 1);
}

#[test]
fn test_schema_version_set() {
    let db = Database::open_in_memory().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

#[test]
fn test_double_migrate_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    db.migrate().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

// ── Decimal round-trip ────────────────────────────────────────

#[test]
fn test_amount_precision_preserved() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.add_record(&make_record("alice", RecordKind::Expense, "Other", dec!(1234.56)))
        .unwrap();
    let records = db.list_records("alice").unwrap();
    assert_eq!(records[0].amount, dec!(1234.56));
}

#[test]
fn test_budget_precision_preserved() {
    let db = Database::open_in_memory().unwrap();
    register_alice(&db);

    db.set_budget("alice", dec!(1234.56)).unwrap();
    assert_eq!(db.get_user("alice").unwrap().unwrap().budget, dec!(1234.56));
}
