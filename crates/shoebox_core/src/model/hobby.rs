//! Hobby tracker domain model.
//!
//! # Responsibility
//! - Define the hobby record, its logged sessions and the tracker filter.
//!
//! # Invariants
//! - `HobbySession::hobby_id` references an existing hobby; removing a
//!   hobby removes its sessions.
//! - Session duration is recorded in whole minutes.

use crate::model::period::Period;
use crate::model::StoredRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hobby the user tracks practice sessions for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub id: Uuid,
    pub name: String,
    /// Optional weekly practice goal used for goal-progress statistics.
    pub weekly_goal_minutes: Option<u32>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Hobby {
    /// Creates a hobby with a generated id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a hobby with a caller-provided id.
    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weekly_goal_minutes: None,
            archived: false,
            created_at: Utc::now(),
        }
    }
}

impl StoredRecord for Hobby {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// One logged practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HobbySession {
    pub id: Uuid,
    pub hobby_id: Uuid,
    pub minutes: u32,
    pub note: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl HobbySession {
    /// Creates a session with a generated id, stamped with the current time.
    pub fn new(hobby_id: Uuid, minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            hobby_id,
            minutes,
            note: None,
            logged_at: Utc::now(),
        }
    }
}

impl StoredRecord for HobbySession {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Filter state for the tracker views, persisted in its own slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HobbyFilter {
    /// Restrict views to one hobby; `None` shows all.
    pub hobby_id: Option<Uuid>,
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub include_archived: bool,
}
