use chrono::{Duration, Utc};
use shoebox_core::query::petcare::{busiest_days, care_stats, events_per_day, filter_events};
use shoebox_core::{CareKind, Period, PetEvent, PetFilter};
use std::collections::BTreeSet;

fn event(pet: &str, kind: CareKind, days_ago: i64) -> PetEvent {
    let mut e = PetEvent::new(pet, kind);
    e.occurred_at = Utc::now() - Duration::days(days_ago);
    e
}

#[test]
fn kind_selection_passes_only_selected_kinds() {
    let events = vec![
        event("Rex", CareKind::Walk, 0),
        event("Rex", CareKind::Feeding, 0),
        event("Rex", CareKind::VetVisit, 0),
    ];
    let filter = PetFilter {
        kinds: BTreeSet::from([CareKind::Walk, CareKind::VetVisit]),
        ..PetFilter::default()
    };

    let hits = filter_events(&events, &filter, Utc::now());
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|e| e.kind != CareKind::Feeding));
}

#[test]
fn pet_selection_restricts_to_one_pet() {
    let events = vec![
        event("Rex", CareKind::Walk, 0),
        event("Whiskers", CareKind::Feeding, 0),
    ];
    let filter = PetFilter {
        pet: Some("Whiskers".to_string()),
        ..PetFilter::default()
    };

    let hits = filter_events(&events, &filter, Utc::now());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].pet, "Whiskers");
}

#[test]
fn period_window_applies_to_events() {
    let events = vec![
        event("Rex", CareKind::Walk, 10),
        event("Rex", CareKind::Walk, 2),
    ];
    let filter = PetFilter {
        period: Period::Week,
        ..PetFilter::default()
    };

    let hits = filter_events(&events, &filter, Utc::now());
    assert_eq!(hits.len(), 1);

    let all = filter_events(&events, &PetFilter::default(), Utc::now());
    assert_eq!(all.len(), 2);
}

#[test]
fn events_per_day_zero_fills_fixed_windows() {
    let events = vec![
        event("Rex", CareKind::Walk, 0),
        event("Rex", CareKind::Feeding, 0),
        event("Rex", CareKind::Walk, 4),
    ];
    let refs: Vec<&PetEvent> = events.iter().collect();

    let buckets = events_per_day(&refs, Period::Week, Utc::now());
    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets[6].count, 2);
    assert_eq!(buckets[2].count, 1);
    assert_eq!(buckets[0].count, 0);
}

#[test]
fn busiest_days_rank_by_count_with_earlier_tie_break() {
    let events = vec![
        event("Rex", CareKind::Walk, 6),
        event("Rex", CareKind::Feeding, 6),
        event("Rex", CareKind::Walk, 1),
        event("Rex", CareKind::Feeding, 1),
        event("Rex", CareKind::Grooming, 3),
    ];
    let refs: Vec<&PetEvent> = events.iter().collect();
    let buckets = events_per_day(&refs, Period::AllTime, Utc::now());

    let top = busiest_days(&buckets, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].count, 2);
    assert!(top[0].day < top[1].day);
}

#[test]
fn care_stats_over_empty_journal_are_sentinels() {
    let stats = care_stats(&[], Utc::now());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.today, 0);
    assert!(stats.by_kind.is_empty());
}

#[test]
fn care_stats_count_today_and_kind_shares() {
    let events = vec![
        event("Rex", CareKind::Walk, 0),
        event("Rex", CareKind::Walk, 1),
        event("Rex", CareKind::Feeding, 1),
        event("Rex", CareKind::Medication, 5),
    ];

    let stats = care_stats(&events, Utc::now());
    assert_eq!(stats.total, 4);
    assert_eq!(stats.today, 1);

    let walks = stats
        .by_kind
        .iter()
        .find(|share| share.kind == CareKind::Walk)
        .unwrap();
    assert_eq!(walks.count, 2);
    assert_eq!(walks.share, 50.0);
    assert_eq!(stats.by_kind.len(), 3);
}
