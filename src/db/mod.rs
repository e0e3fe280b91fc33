mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

/// Outcome of a registration attempt. A taken username is an expected
/// outcome, not an error; genuine store failures propagate as `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegisterOutcome {
    Created,
    DuplicateUsername,
}

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Users ─────────────────────────────────────────────────

    pub(crate) fn register(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<RegisterOutcome> {
        let result = self.conn.execute(
            "INSERT INTO users (username, password_hash, budget) VALUES (?1, ?2, '0')",
            params![username, password_hash],
        );
        match result {
            Ok(_) => Ok(RegisterOutcome::Created),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Ok(RegisterOutcome::DuplicateUsername)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the stored user tuple by username. Password verification is the
    /// caller's job (see `auth::verify_password`).
    pub(crate) fn get_user(&self, username: &str) -> Result<Option<User>> {
        let result = self.conn.query_row(
            "SELECT username, password_hash, budget FROM users WHERE username = ?1",
            params![username],
            |row| {
                let budget_str: String = row.get(2)?;
                Ok(User {
                    username: row.get(0)?,
                    password_hash: row.get(1)?,
                    budget: Decimal::from_str(&budget_str).unwrap_or_default(),
                })
            },
        );
        match result {
            Ok(u) => Ok(Some(u)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the user's monthly budget unconditionally.
    pub(crate) fn set_budget(&self, username: &str, amount: Decimal) -> Result<()> {
        self.conn.execute(
            "UPDATE users SET budget = ?1 WHERE username = ?2",
            params![amount.to_string(), username],
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn user_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?)
    }

    // ── Records ───────────────────────────────────────────────

    /// Append a record. No validation happens here; the controller rejects
    /// non-positive amounts before calling in.
    pub(crate) fn add_record(&self, record: &Record) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO records (username, kind, category, amount, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.username,
                record.kind.as_str(),
                record.category,
                record.amount.to_string(),
                record.date,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All records for a user, newest date first, insertion order for ties.
    pub(crate) fn list_records(&self, username: &str) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, kind, category, amount, date
             FROM records WHERE username = ?1
             ORDER BY date DESC, id DESC",
        )?;
        let rows = stmt.query_map(params![username], |row| {
            let kind: String = row.get(2)?;
            let amount_str: String = row.get(4)?;
            Ok(Record {
                id: Some(row.get(0)?),
                username: row.get(1)?,
                kind: RecordKind::parse(&kind),
                category: row.get(3)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
                date: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    #[cfg(test)]
    pub(crate) fn record_count(&self, username: &str) -> Result<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM records WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )?)
    }

    // ── Summaries ─────────────────────────────────────────────

    /// Expense totals grouped by category, largest first. Categories with no
    /// expense records are absent, not zero.
    pub(crate) fn expense_summary(&self, username: &str) -> Result<Vec<(String, Decimal)>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, CAST(SUM(amount) AS TEXT)
             FROM records
             WHERE username = ?1 AND kind = 'expense'
             GROUP BY category
             ORDER BY SUM(amount) DESC",
        )?;
        let rows = stmt.query_map(params![username], |row| {
            let category: String = row.get(0)?;
            let amt_str: String = row.get(1)?;
            Ok((category, Decimal::from_str(&amt_str).unwrap_or_default()))
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}

#[cfg(test)]
mod tests;
