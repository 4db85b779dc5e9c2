//! SQLite-backed document store.
//!
//! The whole document lives as one JSON blob in a key-value table under a
//! single constant key -- the same persistence shape the original browser
//! application used with local storage. There is no partial or incremental
//! persistence: every save rewrites the blob.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use corkboard_core::document::Document;
use corkboard_core::store::DocumentStore;

use crate::error::Result;

/// Key under which the serialized document is stored.
pub const DOCUMENT_KEY: &str = "corkboard-data";

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// A [`DocumentStore`] over a local SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the database at `path`, creating file and schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Writes a raw value under the document key, bypassing serialization.
    ///
    /// Exists so tests can plant corrupt data and exercise the load-time
    /// fallback.
    pub fn write_raw(&self, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![DOCUMENT_KEY, value],
        )?;
        Ok(())
    }

    fn read_raw(&self) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![DOCUMENT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl DocumentStore for SqliteStore {
    type Error = crate::error::StorageError;

    /// Returns the stored document, or `None` when nothing was stored yet.
    ///
    /// A stored value that fails structural validation (not a Document-shaped
    /// object) is discarded wholesale: it is logged and reported as absent,
    /// never as an error.
    fn load(&self) -> Result<Option<Document>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(None);
        };
        match serde_json::from_str::<Document>(&raw) {
            Ok(doc) => Ok(Some(doc)),
            Err(e) => {
                tracing::warn!("stored document failed validation, treating as absent: {e}");
                Ok(None)
            }
        }
    }

    fn save(&self, doc: &Document) -> Result<()> {
        let raw = serde_json::to_string(doc)?;
        self.write_raw(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_core::document::Board;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        let mut doc = Document::default();
        let id = doc.allocate_board_id();
        doc.boards.push(Board::new(id, "Work"));
        doc
    }

    #[test]
    fn load_on_fresh_database_is_absent() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = SqliteStore::open_in_memory().unwrap();
        let doc = sample();
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), doc);
    }

    #[test]
    fn save_overwrites_the_single_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save(&sample()).unwrap();
        let mut doc = sample();
        doc.boards.clear();
        store.save(&doc).unwrap();

        let rows: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(store.load().unwrap().unwrap(), doc);
    }

    #[test]
    fn corrupt_value_is_treated_as_absent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.write_raw("{definitely not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn wrong_shape_is_treated_as_absent() {
        let store = SqliteStore::open_in_memory().unwrap();
        // `boards` must be a sequence and every counter a number.
        store
            .write_raw(r#"{"boards": 5, "nextBoardId": 1, "nextListId": 1, "nextCardId": 1}"#)
            .unwrap();
        assert!(store.load().unwrap().is_none());

        store.write_raw(r#"{"boards": []}"#).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corkboard.db");

        let doc = sample();
        {
            let store = SqliteStore::open(&path).unwrap();
            store.save(&doc).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), doc);
    }
}
