//! SQLite-backed quote store

use rusqlite::{params, Connection};
use std::path::Path;

use crate::config::Settings;
use crate::storage::models::QuoteRecord;
use crate::{QuotidianError, Result};

/// Database wrapper for quotidian
pub struct Database {
    conn: Connection,
}

const CURRENT_SCHEMA_VERSION: i64 = 1;

impl Database {
    /// Open or create the database. Open failures are reported as
    /// [`QuotidianError::DatabaseUnavailable`] so the HTTP layer can
    /// distinguish them from query failures.
    pub fn open(settings: &Settings) -> Result<Self> {
        let db_path = settings.database_path();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| QuotidianError::DatabaseUnavailable(e.to_string()))?;
        }

        Self::open_path(&db_path)
    }

    /// Open database at a specific path (useful for testing)
    pub fn open_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| QuotidianError::DatabaseUnavailable(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| QuotidianError::DatabaseUnavailable(e.to_string()))?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize database schema
    fn initialize(&self) -> Result<()> {
        let current_version = self.schema_version()?;
        if current_version > CURRENT_SCHEMA_VERSION {
            return Err(QuotidianError::Other(format!(
                "Database schema version {} is newer than supported version {}",
                current_version, CURRENT_SCHEMA_VERSION
            )));
        }

        if current_version < 1 {
            self.create_schema_v1()?;
            self.set_schema_version(1)?;
        }

        Ok(())
    }

    /// Current schema version tracked in PRAGMA user_version.
    pub fn schema_version(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?)
    }

    fn set_schema_version(&self, version: i64) -> Result<()> {
        self.conn
            .execute(&format!("PRAGMA user_version = {}", version), [])?;
        Ok(())
    }

    fn create_schema_v1(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids monotonic; they are never reused after a
        // row is deleted.
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                quote TEXT NOT NULL,
                generated_at TEXT NOT NULL,
                theme TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_quotes_generated_at
                ON quotes(generated_at DESC);
            "#,
        )?;

        Ok(())
    }

    /// Insert a new quote, returning its assigned id
    pub fn insert_quote(&self, quote: &str, generated_at: &str, theme: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO quotes (quote, generated_at, theme) VALUES (?1, ?2, ?3)",
            params![quote, generated_at, theme],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// List the most recent quotes, newest first. Equal timestamps fall
    /// back to insertion order.
    pub fn list_quotes(&self, limit: usize) -> Result<Vec<QuoteRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, quote, generated_at, theme
             FROM quotes
             ORDER BY generated_at DESC, id DESC
             LIMIT ?1",
        )?;

        let quotes = stmt
            .query_map(params![limit], Self::row_to_quote)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(quotes)
    }

    /// List every stored quote in the same order as [`Self::list_quotes`].
    /// Used by the export endpoints.
    pub fn list_all_quotes(&self) -> Result<Vec<QuoteRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, quote, generated_at, theme
             FROM quotes
             ORDER BY generated_at DESC, id DESC",
        )?;

        let quotes = stmt
            .query_map([], Self::row_to_quote)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(quotes)
    }

    /// Delete a quote by id. Deleting a missing id is not an error.
    pub fn delete_quote(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM quotes WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Trivial liveness query for the health endpoint
    pub fn ping(&self) -> Result<()> {
        self.conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    fn row_to_quote(row: &rusqlite::Row) -> rusqlite::Result<QuoteRecord> {
        Ok(QuoteRecord {
            id: row.get(0)?,
            quote: row.get(1)?,
            generated_at: row.get(2)?,
            theme: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_database_sets_schema_version() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.schema_version().unwrap(), 1);
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let db = Database::open_memory().unwrap();

        let first = db
            .insert_quote("Rise and rise again", "2026-08-06T09:00:00+00:00", "grit")
            .unwrap();
        let second = db
            .insert_quote("Fall seven times", "2026-08-06T09:00:01+00:00", "resilience")
            .unwrap();

        assert!(second > first);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let db = Database::open_memory().unwrap();

        let first = db
            .insert_quote("Short lived", "2026-08-06T09:00:00+00:00", "change")
            .unwrap();
        db.delete_quote(first).unwrap();

        let second = db
            .insert_quote("Built to last", "2026-08-06T09:00:01+00:00", "legacy")
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn list_orders_newest_first_and_honors_limit() {
        let db = Database::open_memory().unwrap();

        db.insert_quote("oldest", "2026-08-06T09:00:00+00:00", "timing")
            .unwrap();
        db.insert_quote("middle", "2026-08-06T10:00:00+00:00", "timing")
            .unwrap();
        db.insert_quote("newest", "2026-08-06T11:00:00+00:00", "timing")
            .unwrap();

        let quotes = db.list_quotes(2).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].quote, "newest");
        assert_eq!(quotes[1].quote, "middle");
    }

    #[test]
    fn equal_timestamps_fall_back_to_insertion_order() {
        let db = Database::open_memory().unwrap();

        db.insert_quote("first in", "2026-08-06T09:00:00+00:00", "timing")
            .unwrap();
        db.insert_quote("last in", "2026-08-06T09:00:00+00:00", "timing")
            .unwrap();

        let quotes = db.list_quotes(10).unwrap();
        assert_eq!(quotes[0].quote, "last in");
        assert_eq!(quotes[1].quote, "first in");
    }

    #[test]
    fn round_trip_preserves_fields() {
        let db = Database::open_memory().unwrap();

        let id = db
            .insert_quote(
                "Keep moving forward no matter what",
                "2026-08-06T12:34:56+00:00",
                "perseverance",
            )
            .unwrap();

        let quotes = db.list_quotes(1).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, id);
        assert_eq!(quotes[0].quote, "Keep moving forward no matter what");
        assert_eq!(quotes[0].generated_at, "2026-08-06T12:34:56+00:00");
        assert_eq!(quotes[0].theme, "perseverance");
    }

    #[test]
    fn delete_missing_id_is_success() {
        let db = Database::open_memory().unwrap();

        db.insert_quote("survivor", "2026-08-06T09:00:00+00:00", "endurance")
            .unwrap();
        db.delete_quote(9999).unwrap();

        assert_eq!(db.list_all_quotes().unwrap().len(), 1);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let db = Database::open_memory().unwrap();

        let keep = db
            .insert_quote("keeper", "2026-08-06T09:00:00+00:00", "trust")
            .unwrap();
        let gone = db
            .insert_quote("goner", "2026-08-06T09:00:01+00:00", "change")
            .unwrap();

        db.delete_quote(gone).unwrap();

        let quotes = db.list_all_quotes().unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, keep);
    }

    #[test]
    fn ping_succeeds_on_open_database() {
        let db = Database::open_memory().unwrap();
        db.ping().unwrap();
    }
}
