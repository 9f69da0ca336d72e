// ABOUTME: History list ordering and offset pagination over already-filtered workouts
// ABOUTME: Produces stable pages of workout summaries with total and has_more metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use ironlog_core::models::Workout;
use ironlog_core::pagination::{Pagination, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::aggregate_workout;

/// One row of the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout identifier
    pub id: String,
    /// Workout date
    pub date: NaiveDate,
    /// Free-text notes
    pub notes: Option<String>,
    /// Distinct exercises in the workout
    pub exercise_count: usize,
    /// Sets in the workout
    pub set_count: usize,
    /// First save time
    pub created_at: DateTime<Utc>,
    /// Last save time
    pub updated_at: DateTime<Utc>,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        let counts = aggregate_workout(&workout.sets);
        Self {
            id: workout.id.clone(),
            date: workout.date,
            notes: workout.notes.clone(),
            exercise_count: counts.exercise_count,
            set_count: counts.set_count,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

/// A page of the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutListPage {
    /// Summaries in display order, at most `limit` long
    pub workouts: Vec<WorkoutSummary>,
    /// Window metadata
    pub pagination: Pagination,
}

/// Compare two workouts by date, then creation time, then id, in `order`
///
/// The trailing id comparison makes the order total, so a fixed input
/// always pages the same way.
#[must_use]
pub fn compare_workouts(a: &Workout, b: &Workout, order: SortOrder) -> Ordering {
    let ascending = a
        .date
        .cmp(&b.date)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id));
    match order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

/// Workouts sorted by [`compare_workouts`]
#[must_use]
pub fn sort_workouts(workouts: &[Workout], order: SortOrder) -> Vec<&Workout> {
    let mut sorted: Vec<&Workout> = workouts.iter().collect();
    sorted.sort_by(|a, b| compare_workouts(a, b, order));
    sorted
}

/// Slice `[offset, offset + limit)` out of the ordered workouts
///
/// `all_matching` must already be filtered by the caller's date range and
/// exercise. An offset past the end yields an empty page, not an error.
/// `limit` is expected to be validated at the boundary (1..=100).
#[must_use]
pub fn paginate(
    all_matching: &[Workout],
    limit: usize,
    offset: usize,
    order: SortOrder,
) -> WorkoutListPage {
    let total = all_matching.len();
    debug!(total, limit, offset, order = %order, "paginating workout history");

    let workouts = sort_workouts(all_matching, order)
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(WorkoutSummary::from)
        .collect();

    WorkoutListPage {
        workouts,
        pagination: Pagination::new(total, limit, offset),
    }
}
