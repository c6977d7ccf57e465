//! Pet-care journal domain model.

use crate::model::period::Period;
use crate::model::StoredRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Kind of care event recorded in the journal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CareKind {
    Feeding,
    Walk,
    Grooming,
    VetVisit,
    Medication,
}

impl CareKind {
    /// All kinds in display order.
    pub const ALL: [CareKind; 5] = [
        Self::Feeding,
        Self::Walk,
        Self::Grooming,
        Self::VetVisit,
        Self::Medication,
    ];
}

/// One journal entry for a pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetEvent {
    pub id: Uuid,
    pub pet: String,
    pub kind: CareKind,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl PetEvent {
    /// Creates an event with a generated id, stamped with the current time.
    pub fn new(pet: impl Into<String>, kind: CareKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            pet: pet.into(),
            kind,
            note: None,
            occurred_at: Utc::now(),
        }
    }
}

impl StoredRecord for PetEvent {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Filter state for the journal views, persisted in its own slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PetFilter {
    /// Restrict views to one pet by name; `None` shows all.
    pub pet: Option<String>,
    /// Selected kinds; an empty selection passes every event.
    #[serde(default)]
    pub kinds: BTreeSet<CareKind>,
    #[serde(default)]
    pub period: Period,
}
