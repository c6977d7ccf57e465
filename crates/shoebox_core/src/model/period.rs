//! Time-period selection shared by the app filters.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Rolling window a filter restricts records to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// No window; every record passes.
    #[default]
    AllTime,
}

impl Period {
    /// Window length in days, `None` for the unbounded period.
    pub fn window_days(self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::AllTime => None,
        }
    }

    /// Start of the window relative to `now`, `None` for the unbounded period.
    pub fn window_start(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.window_days().map(|days| now - Duration::days(days))
    }

    /// Whether `timestamp` falls inside the window ending at `now`.
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.window_start(now)
            .map_or(true, |start| timestamp >= start)
    }
}
