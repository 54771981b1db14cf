//! Persistence Adapter
//!
//! Two named string slots in a local SQLite database. This layer is a
//! byte-level pass-through keyed by slot name: it knows nothing about
//! artifacts, and decoding (including the corrupt-payload fallback)
//! belongs to the catalog store above it.

use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

use crate::store::StoreResult;

/// Slot holding the JSON-encoded artifact collection.
pub const ARTIFACT_SLOT: &str = "artifact-collection";
/// Slot holding the JSON-encoded list of liked artifact ids.
pub const LIKE_SLOT: &str = "like-id-set";

/// Thread-safe slot store over SQLite.
pub struct SlotStore {
    conn: Arc<Mutex<Connection>>,
}

impl SlotStore {
    /// Open (or create) the slot store at the given database path.
    pub fn new(db_path: &str) -> StoreResult<Self> {
        let conn = Connection::open(db_path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory slot store for testing.
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Read a slot. A missing row and an empty stored string both report
    /// as `None`; absence is a valid state, not a failure.
    pub fn load(&self, slot: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1",
                params![slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.filter(|v| !v.is_empty()))
    }

    /// Write a slot, replacing any previous value.
    pub fn save(&self, slot: &str, value: &str) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO slots (name, value) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            params![slot, value],
        )?;
        Ok(())
    }
}
