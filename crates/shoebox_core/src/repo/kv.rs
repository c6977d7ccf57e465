//! Byte-level access to the key-value slot table.
//!
//! # Responsibility
//! - Read and overwrite raw slot payloads.
//!
//! # Invariants
//! - `put` replaces the whole value for a key in one statement.

use crate::repo::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

/// SQLite-backed key-value slot store.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Wraps an already-bootstrapped connection (migrations applied).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns the raw payload stored under `key`, if any.
    pub fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Overwrites the payload stored under `key`.
    pub fn put(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
