// ABOUTME: Workout filter contract shared by data sources and the request boundary
// ABOUTME: Inclusive date bounds plus an optional exercise membership constraint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Workout;

/// Criteria a data source applies before workouts reach the engine
///
/// Both date bounds are inclusive. `exercise_id` keeps workouts containing
/// at least one set for that exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutFilter {
    /// Earliest date to include
    pub start_date: Option<NaiveDate>,
    /// Latest date to include
    pub end_date: Option<NaiveDate>,
    /// Exercise the workout must contain
    pub exercise_id: Option<String>,
}

impl WorkoutFilter {
    /// Filter matching every workout
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on an inclusive date window
    #[must_use]
    pub const fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            exercise_id: None,
        }
    }

    /// Restrict to workouts containing `exercise_id`
    #[must_use]
    pub fn with_exercise(mut self, exercise_id: impl Into<String>) -> Self {
        self.exercise_id = Some(exercise_id.into());
        self
    }

    /// Whether `workout` satisfies every criterion
    #[must_use]
    pub fn matches(&self, workout: &Workout) -> bool {
        if self.start_date.is_some_and(|start| workout.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| workout.date > end) {
            return false;
        }
        self.exercise_id
            .as_deref()
            .map_or(true, |exercise_id| workout.contains_exercise(exercise_id))
    }
}
