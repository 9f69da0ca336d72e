// ABOUTME: Dashboard summary builder over a month-bounded window of workouts
// ABOUTME: Computes totals, global distinct exercises, total volume and the most recent workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::collections::HashSet;

use chrono::{Months, NaiveDate};
use ironlog_core::constants::dashboard::RECENT_WORKOUTS_LIMIT;
use ironlog_core::errors::InvalidInputError;
use ironlog_core::models::Workout;
use ironlog_core::pagination::SortOrder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::{aggregate_workout, WorkoutCounts};
use crate::calculator::{ensure_finite, round_to_cents, set_volume};
use crate::history::sort_workouts;

/// Date window the summary covers, echoed back for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardPeriod {
    /// `end_date` minus `months` calendar months
    pub start_date: NaiveDate,
    /// Today
    pub end_date: NaiveDate,
    /// Window length in months
    pub months: u32,
}

/// Totals across every workout in the window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardTotals {
    /// Workouts in the window
    pub total_workouts: usize,
    /// Sets across all workouts
    pub total_sets: usize,
    /// Sum of strength set volume
    pub total_volume: f64,
    /// Distinct exercises across all workouts
    pub unique_exercises: usize,
}

/// Compact entry in the recent workouts list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentWorkout {
    /// Workout identifier
    pub id: String,
    /// Workout date
    pub date: NaiveDate,
    /// Distinct exercises in the workout
    pub exercise_count: usize,
    /// Sets in the workout
    pub set_count: usize,
}

/// Dashboard response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Window covered
    pub period: DashboardPeriod,
    /// Aggregate numbers
    pub summary: DashboardTotals,
    /// Newest workouts first, at most five
    pub recent_workouts: Vec<RecentWorkout>,
}

/// Inclusive `(start, end)` dates for a window of `months` ending `today`
///
/// Month arithmetic clamps to the end of shorter months, so 31 March minus
/// one month is the last day of February.
#[must_use]
pub fn dashboard_window(today: NaiveDate, months: u32) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN);
    (start, today)
}

struct WorkoutTally {
    counts: WorkoutCounts,
    volume: f64,
}

fn tally(workout: &Workout) -> Result<WorkoutTally, InvalidInputError> {
    let volume = workout
        .sets
        .iter()
        .map(set_volume)
        .sum::<Result<f64, _>>()?;
    Ok(WorkoutTally {
        counts: aggregate_workout(&workout.sets),
        volume,
    })
}

/// Summarize `workouts` for the dashboard
///
/// The caller has already restricted `workouts` to the window; the period is
/// computed here only to echo it back. `months` is assumed to be in
/// `1..=12`. No workouts is a valid state and yields zeros and an empty
/// recent list.
///
/// CPU-bound: per-workout tallies run on the rayon pool and the call blocks
/// until they finish. Async callers should run it off the executor threads.
///
/// # Errors
///
/// Propagates `InvalidInputError` from volume calculation if a stored set
/// carries out-of-range values, and returns `ResultNotFinite` if the summed
/// volume overflows.
pub fn build_dashboard_summary(
    workouts: &[Workout],
    months: u32,
    today: NaiveDate,
) -> Result<DashboardSummary, InvalidInputError> {
    let (start_date, end_date) = dashboard_window(today, months);
    debug!(
        workouts = workouts.len(),
        months,
        %start_date,
        %end_date,
        "building dashboard summary"
    );

    // Per-workout tallies run in parallel; collect keeps input order so the
    // sequential sum below is deterministic.
    let tallies = workouts
        .par_iter()
        .map(tally)
        .collect::<Result<Vec<_>, _>>()?;

    let total_sets = tallies.iter().map(|t| t.counts.set_count).sum();
    let volume_sum: f64 = tallies.iter().map(|t| t.volume).sum();
    let total_volume = ensure_finite(round_to_cents(volume_sum))?;

    let unique_exercises = workouts
        .iter()
        .flat_map(|workout| workout.sets.iter().map(|set| set.exercise_id.as_str()))
        .collect::<HashSet<_>>()
        .len();

    let recent_workouts = sort_workouts(workouts, SortOrder::Desc)
        .into_iter()
        .take(RECENT_WORKOUTS_LIMIT)
        .map(|workout| {
            let counts = aggregate_workout(&workout.sets);
            RecentWorkout {
                id: workout.id.clone(),
                date: workout.date,
                exercise_count: counts.exercise_count,
                set_count: counts.set_count,
            }
        })
        .collect();

    Ok(DashboardSummary {
        period: DashboardPeriod {
            start_date,
            end_date,
            months,
        },
        summary: DashboardTotals {
            total_workouts: workouts.len(),
            total_sets,
            total_volume,
            unique_exercises,
        },
        recent_workouts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ironlog_core::models::LoggedSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout(id: &str, day: NaiveDate, sets: Vec<LoggedSet>) -> Workout {
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Workout::new(id, "u1", day, created_at, sets)
    }

    #[test]
    fn test_strength_and_cardio_window() {
        let a = workout(
            "a",
            date(2025, 5, 10),
            vec![
                LoggedSet::strength("bench", 100.0, 8).unwrap(),
                LoggedSet::strength("bench", 100.0, 7)
                    .unwrap()
                    .with_sort_order(1),
                LoggedSet::strength("bench", 100.0, 6)
                    .unwrap()
                    .with_sort_order(2),
            ],
        );
        let b = workout(
            "b",
            date(2025, 5, 12),
            vec![LoggedSet::cardio("run", 5.0, 1500.0).unwrap()],
        );

        let dashboard = build_dashboard_summary(&[a, b], 3, date(2025, 5, 20)).unwrap();

        assert_eq!(dashboard.summary.total_workouts, 2);
        assert_eq!(dashboard.summary.total_sets, 4);
        assert_eq!(dashboard.summary.total_volume, 2100.0);
        assert_eq!(dashboard.summary.unique_exercises, 2);
        assert_eq!(dashboard.recent_workouts[0].id, "b");
        assert_eq!(dashboard.recent_workouts[1].set_count, 3);
        assert_eq!(dashboard.recent_workouts[1].exercise_count, 1);
    }

    #[test]
    fn test_empty_window() {
        let dashboard = build_dashboard_summary(&[], 1, date(2025, 5, 20)).unwrap();

        assert_eq!(dashboard.summary, DashboardTotals::default());
        assert!(dashboard.recent_workouts.is_empty());
        assert_eq!(dashboard.period.start_date, date(2025, 4, 20));
        assert_eq!(dashboard.period.end_date, date(2025, 5, 20));
        assert_eq!(dashboard.period.months, 1);
    }

    #[test]
    fn test_period_clamps_to_month_end() {
        let (start, end) = dashboard_window(date(2025, 3, 31), 1);
        assert_eq!(start, date(2025, 2, 28));
        assert_eq!(end, date(2025, 3, 31));

        let (start, _) = dashboard_window(date(2024, 12, 15), 12);
        assert_eq!(start, date(2023, 12, 15));
    }

    #[test]
    fn test_recent_workouts_capped_and_tie_broken_by_creation() {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let workouts: Vec<Workout> = (0..7)
            .map(|i| {
                let mut w = workout(
                    &format!("w{i}"),
                    date(2025, 5, 1),
                    vec![LoggedSet::strength("squat", 60.0, 5).unwrap()],
                );
                w.created_at = base + Duration::minutes(i);
                w
            })
            .collect();

        let dashboard = build_dashboard_summary(&workouts, 1, date(2025, 5, 2)).unwrap();
        let ids: Vec<&str> = dashboard
            .recent_workouts
            .iter()
            .map(|w| w.id.as_str())
            .collect();

        assert_eq!(ids, vec!["w6", "w5", "w4", "w3", "w2"]);
        assert_eq!(dashboard.summary.total_workouts, 7);
    }

    #[test]
    fn test_unique_exercises_is_global() {
        let a = workout(
            "a",
            date(2025, 5, 1),
            vec![
                LoggedSet::strength("squat", 60.0, 5).unwrap(),
                LoggedSet::strength("bench", 40.0, 5).unwrap(),
            ],
        );
        let b = workout(
            "b",
            date(2025, 5, 2),
            vec![LoggedSet::strength("squat", 65.0, 5).unwrap()],
        );

        let dashboard = build_dashboard_summary(&[a, b], 1, date(2025, 5, 3)).unwrap();
        assert_eq!(dashboard.summary.unique_exercises, 2);
    }

    #[test]
    fn test_serialized_shape() {
        let dashboard = build_dashboard_summary(&[], 6, date(2025, 7, 1)).unwrap();
        let value = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(value["period"]["start_date"], "2025-01-01");
        assert_eq!(value["period"]["months"], 6);
        assert_eq!(value["summary"]["total_volume"], 0.0);
        assert!(value["recent_workouts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_total_volume_is_an_error() {
        let sets = (0..200)
            .map(|i| {
                LoggedSet::strength("squat", 1e304, 100)
                    .unwrap()
                    .with_sort_order(i)
            })
            .collect();
        let heavy = workout("heavy", date(2025, 5, 1), sets);

        assert_eq!(
            build_dashboard_summary(&[heavy], 1, date(2025, 5, 2)).unwrap_err(),
            InvalidInputError::ResultNotFinite
        );
    }
}
