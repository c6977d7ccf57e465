//! Pet-care journal store.

use crate::model::pet::{PetEvent, PetFilter};
use crate::store::collection::Collection;
use crate::store::subscribers::{Subscribers, SubscriptionId};
use crate::store::value::PersistedValue;
use crate::store::write_behind::WriteBehind;
use uuid::Uuid;

pub const PET_EVENTS_SLOT: &str = "petcare/collection";
pub const PET_FILTER_SLOT: &str = "petcare/filter";

pub struct PetCareStore {
    events: Collection<PetEvent>,
    filter: PersistedValue<PetFilter>,
    subscribers: Subscribers,
}

impl PetCareStore {
    pub(crate) fn new(events: Vec<PetEvent>, filter: PetFilter, writer: WriteBehind) -> Self {
        Self {
            events: Collection::new(PET_EVENTS_SLOT, events, writer.clone()),
            filter: PersistedValue::new(PET_FILTER_SLOT, filter, writer),
            subscribers: Subscribers::default(),
        }
    }

    pub fn events(&self) -> &[PetEvent] {
        self.events.records()
    }

    pub fn get(&self, id: Uuid) -> Option<&PetEvent> {
        self.events.get(id)
    }

    pub fn add_event(&mut self, event: PetEvent) {
        self.events.add(event);
        self.subscribers.notify();
    }

    pub fn update_event(&mut self, event: PetEvent) {
        if self.events.update(event) {
            self.subscribers.notify();
        }
    }

    pub fn remove_event(&mut self, id: Uuid) {
        if self.events.remove(id) {
            self.subscribers.notify();
        }
    }

    pub fn filter(&self) -> &PetFilter {
        self.filter.get()
    }

    pub fn set_filter(&mut self, filter: PetFilter) {
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
