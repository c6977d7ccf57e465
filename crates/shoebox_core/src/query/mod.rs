//! Pure derived views over store state.
//!
//! # Responsibility
//! - Compute filtered subsets, stable sort orders, per-day buckets and
//!   simple aggregates from a collection plus filter state.
//!
//! # Invariants
//! - Every function is a pure function of its inputs (including the
//!   explicit `now`); nothing here caches or mutates store state.
//! - Empty inputs produce zero/empty sentinels, never an error.
//! - Orderings are deterministic; ties break by date or id.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::BTreeMap;

pub mod hobbies;
pub mod petcare;
pub mod recipes;

/// Calendar-day key for a timestamp in the ambient timezone.
pub fn local_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Arithmetic mean, with `None` as the empty-input sentinel.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0u32;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Share of `part` in `whole` as a percentage, `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// One calendar day's aggregate within a group-by-day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub day: NaiveDate,
    /// Number of records on this day.
    pub count: usize,
    /// Sum of the per-record weight (minutes, counts, ...) on this day.
    pub total: u64,
}

/// Groups items into calendar-day buckets, ascending by day.
///
/// Days without records are omitted; use [`fill_missing_days`] when a fixed
/// window should carry zero-buckets.
pub fn bucket_days<T>(
    items: &[T],
    day_of: impl Fn(&T) -> NaiveDate,
    weight_of: impl Fn(&T) -> u64,
) -> Vec<DayBucket> {
    let mut days: BTreeMap<NaiveDate, (usize, u64)> = BTreeMap::new();
    for item in items {
        let entry = days.entry(day_of(item)).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += weight_of(item);
    }
    days.into_iter()
        .map(|(day, (count, total))| DayBucket { day, count, total })
        .collect()
}

/// Expands buckets to cover every day from `from` through `to` inclusive,
/// inserting zero-buckets for absent days. Buckets outside the range are
/// dropped.
pub fn fill_missing_days(buckets: &[DayBucket], from: NaiveDate, to: NaiveDate) -> Vec<DayBucket> {
    let by_day: BTreeMap<NaiveDate, &DayBucket> =
        buckets.iter().map(|bucket| (bucket.day, bucket)).collect();
    let mut filled = Vec::new();
    let mut day = from;
    while day <= to {
        filled.push(by_day.get(&day).copied().copied().unwrap_or(DayBucket {
            day,
            count: 0,
            total: 0,
        }));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    filled
}

/// Top-`n` buckets by `rank`, descending; ties break by the earlier
/// calendar date so repeated computations stay deterministic.
pub fn top_days(
    buckets: &[DayBucket],
    n: usize,
    rank: impl Fn(&DayBucket) -> u64,
) -> Vec<DayBucket> {
    let mut ranked: Vec<DayBucket> = buckets.to_vec();
    ranked.sort_by(|a, b| rank(b).cmp(&rank(a)).then_with(|| a.day.cmp(&b.day)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::{bucket_days, fill_missing_days, mean, percentage, top_days, DayBucket};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn mean_of_empty_input_is_none() {
        assert_eq!(mean([]), None);
        assert_eq!(mean([10.0, 20.0]), Some(15.0));
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn bucket_days_sums_weights_per_day() {
        let items = [(day(1), 10u64), (day(1), 20), (day(3), 5)];
        let buckets = bucket_days(&items, |item| item.0, |item| item.1);
        assert_eq!(
            buckets,
            vec![
                DayBucket {
                    day: day(1),
                    count: 2,
                    total: 30
                },
                DayBucket {
                    day: day(3),
                    count: 1,
                    total: 5
                },
            ]
        );
    }

    #[test]
    fn fill_missing_days_inserts_zero_buckets() {
        let buckets = [DayBucket {
            day: day(2),
            count: 1,
            total: 1,
        }];
        let filled = fill_missing_days(&buckets, day(1), day(3));
        assert_eq!(filled.len(), 3);
        assert_eq!(filled[0].count, 0);
        assert_eq!(filled[1].count, 1);
        assert_eq!(filled[2].count, 0);
    }

    #[test]
    fn top_days_breaks_ties_by_earlier_date() {
        let buckets = [
            DayBucket {
                day: day(5),
                count: 2,
                total: 2,
            },
            DayBucket {
                day: day(1),
                count: 2,
                total: 2,
            },
            DayBucket {
                day: day(3),
                count: 1,
                total: 1,
            },
        ];
        let top = top_days(&buckets, 2, |bucket| bucket.count as u64);
        assert_eq!(top[0].day, day(1));
        assert_eq!(top[1].day, day(5));
    }
}
