//! Derived views for the pet-care journal.

use crate::model::pet::{CareKind, PetEvent, PetFilter};
use crate::model::period::Period;
use crate::query::{bucket_days, fill_missing_days, local_day, percentage, top_days, DayBucket};
use chrono::{DateTime, Duration, Utc};

/// Returns the events passing the journal filter.
pub fn filter_events<'a>(
    events: &'a [PetEvent],
    filter: &PetFilter,
    now: DateTime<Utc>,
) -> Vec<&'a PetEvent> {
    events
        .iter()
        .filter(|event| filter.pet.as_deref().map_or(true, |pet| event.pet == pet))
        .filter(|event| filter.kinds.is_empty() || filter.kinds.contains(&event.kind))
        .filter(|event| filter.period.contains(event.occurred_at, now))
        .collect()
}

/// Care events per calendar day; fixed windows zero-fill absent days.
pub fn events_per_day(events: &[&PetEvent], period: Period, now: DateTime<Utc>) -> Vec<DayBucket> {
    let buckets = bucket_days(events, |event| local_day(event.occurred_at), |_| 1);
    match period.window_days() {
        Some(days) => {
            let today = local_day(now);
            let from = today - Duration::days(days - 1);
            fill_missing_days(&buckets, from, today)
        }
        None => buckets,
    }
}

/// Top-`n` days by event count; ties break by the earlier date.
pub fn busiest_days(buckets: &[DayBucket], n: usize) -> Vec<DayBucket> {
    top_days(buckets, n, |bucket| bucket.count as u64)
}

/// Per-kind slice of the journal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindShare {
    pub kind: CareKind,
    pub count: usize,
    pub share: f64,
}

/// Aggregates over the whole journal.
#[derive(Debug, Clone, PartialEq)]
pub struct CareStats {
    pub total: usize,
    /// Events whose calendar day is today.
    pub today: usize,
    /// Kinds with at least one event, in display order.
    pub by_kind: Vec<KindShare>,
}

pub fn care_stats(events: &[PetEvent], now: DateTime<Utc>) -> CareStats {
    let total = events.len();
    let today_key = local_day(now);
    let today = events
        .iter()
        .filter(|event| local_day(event.occurred_at) == today_key)
        .count();

    let by_kind = CareKind::ALL
        .iter()
        .filter_map(|&kind| {
            let count = events.iter().filter(|event| event.kind == kind).count();
            (count > 0).then_some(KindShare {
                kind,
                count,
                share: percentage(count, total),
            })
        })
        .collect();

    CareStats {
        total,
        today,
        by_kind,
    }
}
