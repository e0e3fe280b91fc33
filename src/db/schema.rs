pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    username      TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL,
    budget        TEXT NOT NULL DEFAULT '0'
);

CREATE TABLE IF NOT EXISTS records (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL REFERENCES users(username),
    kind     TEXT NOT NULL,
    category TEXT NOT NULL,
    amount   TEXT NOT NULL,
    date     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_records_username ON records(username);
CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here:
    // (1, "ALTER TABLE records ADD COLUMN note TEXT NOT NULL DEFAULT '';"),
];
