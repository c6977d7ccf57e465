//! Derived views for the hobby tracker.

use crate::model::hobby::{Hobby, HobbyFilter, HobbySession};
use crate::model::period::Period;
use crate::query::{bucket_days, fill_missing_days, local_day, mean, percentage, DayBucket};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Returns the sessions passing the tracker filter.
///
/// Sessions of archived hobbies are hidden unless the filter opts in.
pub fn filter_sessions<'a>(
    sessions: &'a [HobbySession],
    hobbies: &[Hobby],
    filter: &HobbyFilter,
    now: DateTime<Utc>,
) -> Vec<&'a HobbySession> {
    let archived: BTreeSet<Uuid> = hobbies
        .iter()
        .filter(|hobby| hobby.archived)
        .map(|hobby| hobby.id)
        .collect();

    sessions
        .iter()
        .filter(|session| filter.hobby_id.map_or(true, |id| session.hobby_id == id))
        .filter(|session| filter.include_archived || !archived.contains(&session.hobby_id))
        .filter(|session| filter.period.contains(session.logged_at, now))
        .collect()
}

/// Practiced minutes per calendar day.
///
/// Fixed windows (week/month) zero-fill every day of the window; the
/// unbounded period lists only days with sessions.
pub fn minutes_per_day(
    sessions: &[&HobbySession],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<DayBucket> {
    let buckets = bucket_days(
        sessions,
        |session| local_day(session.logged_at),
        |session| u64::from(session.minutes),
    );
    match period.window_days() {
        Some(days) => {
            let today = local_day(now);
            let from = today - Duration::days(days - 1);
            fill_missing_days(&buckets, from, today)
        }
        None => buckets,
    }
}

/// Aggregates for one hobby.
#[derive(Debug, Clone, PartialEq)]
pub struct HobbyStats {
    pub sessions: usize,
    pub total_minutes: u64,
    pub avg_session_minutes: Option<f64>,
    /// Share of days in the period with at least one session.
    pub active_day_share: f64,
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
    /// Progress toward the weekly goal over the last 7 days, when set.
    pub weekly_goal_share: Option<f64>,
}

/// Computes statistics for `hobby` over the sessions within `period`.
///
/// Streaks are computed over the hobby's full history regardless of the
/// selected period.
pub fn hobby_stats(
    hobby: &Hobby,
    sessions: &[HobbySession],
    period: Period,
    now: DateTime<Utc>,
) -> HobbyStats {
    let own: Vec<&HobbySession> = sessions
        .iter()
        .filter(|session| session.hobby_id == hobby.id)
        .collect();
    let in_period: Vec<&&HobbySession> = own
        .iter()
        .filter(|session| period.contains(session.logged_at, now))
        .collect();

    let total_minutes: u64 = in_period
        .iter()
        .map(|session| u64::from(session.minutes))
        .sum();
    let avg_session_minutes = mean(in_period.iter().map(|session| f64::from(session.minutes)));

    let active_days: BTreeSet<NaiveDate> = in_period
        .iter()
        .map(|session| local_day(session.logged_at))
        .collect();
    let days_in_period = match period.window_days() {
        Some(days) => days as usize,
        // Unbounded period: measure against the span from the first
        // session to today.
        None => active_days.first().map_or(0, |first| {
            (local_day(now) - *first).num_days().max(0) as usize + 1
        }),
    };

    let all_days: BTreeSet<NaiveDate> = own
        .iter()
        .map(|session| local_day(session.logged_at))
        .collect();
    let (current_streak_days, longest_streak_days) = streaks(&all_days, local_day(now));

    let week_minutes: u64 = own
        .iter()
        .filter(|session| Period::Week.contains(session.logged_at, now))
        .map(|session| u64::from(session.minutes))
        .sum();
    let weekly_goal_share = hobby.weekly_goal_minutes.map(|goal| {
        if goal == 0 {
            0.0
        } else {
            week_minutes as f64 * 100.0 / f64::from(goal)
        }
    });

    HobbyStats {
        sessions: in_period.len(),
        total_minutes,
        avg_session_minutes,
        active_day_share: percentage(active_days.len(), days_in_period),
        current_streak_days,
        longest_streak_days,
        weekly_goal_share,
    }
}

/// Returns `(current, longest)` run of consecutive practice days.
///
/// The current streak counts back from today, or from yesterday when today
/// has no session yet.
fn streaks(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> (u32, u32) {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &day in days {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    let anchor = if days.contains(&today) {
        Some(today)
    } else if days.contains(&(today - Duration::days(1))) {
        Some(today - Duration::days(1))
    } else {
        None
    };
    let current = match anchor {
        Some(mut day) => {
            let mut count = 0u32;
            while days.contains(&day) {
                count += 1;
                day = day - Duration::days(1);
            }
            count
        }
        None => 0,
    };

    (current, longest)
}
