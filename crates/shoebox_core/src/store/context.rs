//! Composition root owning the per-app stores.
//!
//! # Responsibility
//! - Open storage, load every slot, spawn the write-behind writer and hand
//!   out the stores.
//!
//! # Invariants
//! - There is exactly one `Shoebox` per storage location; consumers receive
//!   it by reference instead of reaching for a global singleton.
//! - All slot reads happen here, before the writer thread takes ownership
//!   of the connection.

use crate::db::{open_db, open_db_in_memory};
use crate::model::prefs::LaunchPrefs;
use crate::repo::kv::KvStore;
use crate::repo::{snapshot, StorageResult};
use crate::store::hobbies::{HobbyStore, HOBBIES_SLOT, HOBBY_FILTER_SLOT, SESSIONS_SLOT};
use crate::store::petcare::{PetCareStore, PET_EVENTS_SLOT, PET_FILTER_SLOT};
use crate::store::recipes::{RecipeStore, RECIPES_SLOT, RECIPE_FILTER_SLOT};
use crate::store::value::PersistedValue;
use crate::store::write_behind::WriteBehind;
use log::info;
use std::path::Path;

pub const LAUNCH_PREFS_SLOT: &str = "prefs/launch";

/// Application context owning the three stores and launch preferences.
pub struct Shoebox {
    pub recipes: RecipeStore,
    pub hobbies: HobbyStore,
    pub petcare: PetCareStore,
    prefs: PersistedValue<LaunchPrefs>,
    writer: WriteBehind,
}

impl Shoebox {
    /// Opens the slot database at `path` and loads all persisted state.
    ///
    /// This is the only fallible construction path: a database that cannot
    /// be opened cannot be worked around. Missing or undecodable slots load
    /// as empty collections and default filters.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Ok(Self::load(KvStore::new(open_db(path)?)))
    }

    /// Opens an in-memory context, used by tests and previews.
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::load(KvStore::new(open_db_in_memory()?)))
    }

    fn load(kv: KvStore) -> Self {
        let recipes = snapshot::load(&kv, RECIPES_SLOT);
        let recipe_filter = snapshot::load(&kv, RECIPE_FILTER_SLOT);
        let hobbies = snapshot::load(&kv, HOBBIES_SLOT);
        let sessions = snapshot::load(&kv, SESSIONS_SLOT);
        let hobby_filter = snapshot::load(&kv, HOBBY_FILTER_SLOT);
        let pet_events = snapshot::load(&kv, PET_EVENTS_SLOT);
        let pet_filter = snapshot::load(&kv, PET_FILTER_SLOT);
        let prefs: LaunchPrefs = snapshot::load(&kv, LAUNCH_PREFS_SLOT);

        let writer = WriteBehind::spawn(kv);

        info!("event=context_open module=store status=ok");

        Self {
            recipes: RecipeStore::new(recipes, recipe_filter, writer.clone()),
            hobbies: HobbyStore::new(hobbies, sessions, hobby_filter, writer.clone()),
            petcare: PetCareStore::new(pet_events, pet_filter, writer.clone()),
            prefs: PersistedValue::new(LAUNCH_PREFS_SLOT, prefs, writer.clone()),
            writer,
        }
    }

    /// Launch preferences read once at startup to choose the initial screen.
    pub fn launch_prefs(&self) -> &LaunchPrefs {
        self.prefs.get()
    }

    pub fn mark_onboarding_seen(&mut self) {
        let mut prefs = *self.prefs.get();
        prefs.onboarding_seen = true;
        self.prefs.set(prefs);
    }

    /// Blocks until every pending slot write has been attempted.
    pub fn flush(&self) {
        self.writer.flush();
    }
}

impl Drop for Shoebox {
    fn drop(&mut self) {
        self.writer.flush();
    }
}
