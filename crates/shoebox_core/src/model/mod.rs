//! Domain models for the three bundled record apps.
//!
//! # Responsibility
//! - Define the canonical record and filter shapes used by core logic.
//! - Keep one record trait so store plumbing is shared across apps.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` that is never reused.
//! - Records are immutable-by-replacement; mutation is lookup-and-replace.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub mod hobby;
pub mod period;
pub mod pet;
pub mod prefs;
pub mod recipe;

/// Contract every storable record satisfies.
///
/// Collections are ordered sequences unique by `id()`; update and delete
/// operations locate records by identifier, never by position.
pub trait StoredRecord: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> Uuid;
}
