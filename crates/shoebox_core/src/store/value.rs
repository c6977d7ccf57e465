//! Single persisted value bound to one slot.
//!
//! Used for filter/sort state and launch preferences, which persist
//! independently of the collections they accompany.

use crate::repo::snapshot;
use crate::store::write_behind::WriteBehind;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct PersistedValue<T> {
    slot: &'static str,
    value: T,
    writer: WriteBehind,
}

impl<T: Clone + Default + Serialize + DeserializeOwned> PersistedValue<T> {
    /// Wraps a value loaded by the composition root.
    pub(crate) fn new(slot: &'static str, value: T, writer: WriteBehind) -> Self {
        Self {
            slot,
            value,
            writer,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and persists it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Restores the default value and persists it.
    pub fn reset(&mut self) {
        self.set(T::default());
    }

    fn persist(&self) {
        match snapshot::encode(&self.value) {
            Ok(bytes) => self.writer.enqueue(self.slot, bytes),
            Err(err) => {
                warn!(
                    "event=value_persist module=store status=error slot={} error={err}",
                    self.slot
                );
            }
        }
    }
}
