//! Hobby tracker store.
//!
//! # Responsibility
//! - Own both tracker sequences (hobbies and logged sessions), each in its
//!   own persistence slot, plus the shared filter state.
//!
//! # Invariants
//! - Removing a hobby removes its sessions in the same call.

use crate::model::hobby::{Hobby, HobbyFilter, HobbySession};
use crate::store::collection::Collection;
use crate::store::subscribers::{Subscribers, SubscriptionId};
use crate::store::value::PersistedValue;
use crate::store::write_behind::WriteBehind;
use uuid::Uuid;

pub const HOBBIES_SLOT: &str = "hobbies/collection";
pub const SESSIONS_SLOT: &str = "hobbies/sessions";
pub const HOBBY_FILTER_SLOT: &str = "hobbies/filter";

pub struct HobbyStore {
    hobbies: Collection<Hobby>,
    sessions: Collection<HobbySession>,
    filter: PersistedValue<HobbyFilter>,
    subscribers: Subscribers,
}

impl HobbyStore {
    pub(crate) fn new(
        hobbies: Vec<Hobby>,
        sessions: Vec<HobbySession>,
        filter: HobbyFilter,
        writer: WriteBehind,
    ) -> Self {
        Self {
            hobbies: Collection::new(HOBBIES_SLOT, hobbies, writer.clone()),
            sessions: Collection::new(SESSIONS_SLOT, sessions, writer.clone()),
            filter: PersistedValue::new(HOBBY_FILTER_SLOT, filter, writer),
            subscribers: Subscribers::default(),
        }
    }

    pub fn hobbies(&self) -> &[Hobby] {
        self.hobbies.records()
    }

    pub fn sessions(&self) -> &[HobbySession] {
        self.sessions.records()
    }

    pub fn get_hobby(&self, id: Uuid) -> Option<&Hobby> {
        self.hobbies.get(id)
    }

    pub fn add_hobby(&mut self, hobby: Hobby) {
        self.hobbies.add(hobby);
        self.subscribers.notify();
    }

    pub fn update_hobby(&mut self, hobby: Hobby) {
        if self.hobbies.update(hobby) {
            self.subscribers.notify();
        }
    }

    /// Removes a hobby and every session logged against it.
    pub fn remove_hobby(&mut self, id: Uuid) {
        if self.hobbies.remove(id) {
            self.sessions.retain(|session| session.hobby_id != id);
            self.subscribers.notify();
        }
    }

    pub fn toggle_archived(&mut self, id: Uuid) {
        if self.hobbies.modify(id, |hobby| hobby.archived = !hobby.archived) {
            self.subscribers.notify();
        }
    }

    pub fn log_session(&mut self, session: HobbySession) {
        self.sessions.add(session);
        self.subscribers.notify();
    }

    pub fn update_session(&mut self, session: HobbySession) {
        if self.sessions.update(session) {
            self.subscribers.notify();
        }
    }

    pub fn remove_session(&mut self, id: Uuid) {
        if self.sessions.remove(id) {
            self.subscribers.notify();
        }
    }

    pub fn filter(&self) -> &HobbyFilter {
        self.filter.get()
    }

    pub fn set_filter(&mut self, filter: HobbyFilter) {
        self.filter.set(filter);
        self.subscribers.notify();
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
        self.subscribers.notify();
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
