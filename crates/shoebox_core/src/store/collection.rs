//! In-memory record collection bound to one persistence slot.
//!
//! # Responsibility
//! - Hold one ordered sequence of records, unique by id.
//! - Re-encode and enqueue the whole collection after every mutation.
//!
//! # Invariants
//! - Update/remove locate records by id; a miss is a silent no-op that
//!   issues no persistence write and reports no change.
//! - Insertion order carries no meaning; derived views re-sort on read.

use crate::model::StoredRecord;
use crate::repo::snapshot;
use crate::store::write_behind::WriteBehind;
use log::warn;
use uuid::Uuid;

pub struct Collection<R: StoredRecord> {
    slot: &'static str,
    records: Vec<R>,
    writer: WriteBehind,
}

impl<R: StoredRecord> Collection<R> {
    /// Wraps records loaded by the composition root.
    pub(crate) fn new(slot: &'static str, records: Vec<R>, writer: WriteBehind) -> Self {
        Self {
            slot,
            records,
            writer,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and persists. The caller supplies a fully formed
    /// record; the store trusts its input.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
        self.persist();
    }

    /// Replaces the record sharing `record.id()`. Returns whether a record
    /// was found; a miss changes nothing.
    pub fn update(&mut self, record: R) -> bool {
        let Some(existing) = self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
        else {
            return false;
        };
        *existing = record;
        self.persist();
        true
    }

    /// Removes the record with `id`. Returns whether a record was found.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Lookup-and-replace convenience for field edits such as flag toggles.
    /// Returns whether a record was found.
    pub fn modify(&mut self, id: Uuid, edit: impl FnOnce(&mut R)) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return false;
        };
        edit(record);
        self.persist();
        true
    }

    /// Removes every record failing the predicate. Returns whether anything
    /// was removed.
    pub fn retain(&mut self, keep: impl Fn(&R) -> bool) -> bool {
        let before = self.records.len();
        self.records.retain(|record| keep(record));
        if self.records.len() == before {
            return false;
        }
        self.persist();
        true
    }

    fn persist(&self) {
        match snapshot::encode(&self.records) {
            Ok(bytes) => self.writer.enqueue(self.slot, bytes),
            Err(err) => {
                warn!(
                    "event=collection_persist module=store status=error slot={} error={err}",
                    self.slot
                );
            }
        }
    }
}
