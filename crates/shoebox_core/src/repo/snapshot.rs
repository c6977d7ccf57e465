//! Versioned snapshot codec for slot payloads.
//!
//! # Responsibility
//! - Wrap collections and single values in a versioned JSON envelope.
//! - Map every load-side failure to the empty/default value.
//!
//! # Invariants
//! - Field names are stable; added fields must carry serde defaults so old
//!   snapshots keep decoding.
//! - A snapshot version newer than this binary supports is treated as
//!   "no data yet", never as an error.

use crate::repo::kv::KvStore;
use crate::repo::StorageResult;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Version written into every envelope produced by this binary.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    data: T,
}

/// Encodes `value` into a versioned envelope ready for a slot write.
pub fn encode<T: Serialize>(value: &T) -> StorageResult<Vec<u8>> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        data: value,
    };
    let bytes = serde_json::to_vec(&envelope).map_err(crate::repo::StorageError::Encode)?;
    Ok(bytes)
}

/// Encodes `value` and writes it into `slot`.
pub fn save<T: Serialize>(kv: &KvStore, slot: &str, value: &T) -> StorageResult<()> {
    let bytes = encode(value)?;
    kv.put(slot, &bytes)
}

/// Loads the value stored in `slot`.
///
/// A missing slot, an undecodable payload and a newer-than-supported
/// version all yield `T::default()`; none of them surface as errors.
pub fn load<T: DeserializeOwned + Default>(kv: &KvStore, slot: &str) -> T {
    let bytes = match kv.get(slot) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!("event=slot_load module=repo status=empty slot={slot}");
            return T::default();
        }
        Err(err) => {
            warn!("event=slot_load module=repo status=error slot={slot} error={err}");
            return T::default();
        }
    };

    match serde_json::from_slice::<Envelope<T>>(&bytes) {
        Ok(envelope) if envelope.version <= SNAPSHOT_VERSION => envelope.data,
        Ok(envelope) => {
            warn!(
                "event=slot_load module=repo status=newer_version slot={slot} version={}",
                envelope.version
            );
            T::default()
        }
        Err(err) => {
            warn!("event=slot_load module=repo status=undecodable slot={slot} error={err}");
            T::default()
        }
    }
}
