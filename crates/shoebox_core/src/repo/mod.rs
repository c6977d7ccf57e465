//! Persistence layer: key-value slots and the snapshot codec.
//!
//! # Responsibility
//! - Provide full-overwrite byte storage keyed by slot name.
//! - Encode/decode whole collections and single values losslessly.
//!
//! # Invariants
//! - Every save writes the complete payload for its slot; there is no
//!   append-only log and no partial write.
//! - Decode failure on load is equivalent to "no data yet" for callers.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod snapshot;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for slot persistence and snapshot codec operations.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
