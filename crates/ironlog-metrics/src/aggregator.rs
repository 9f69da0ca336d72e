// ABOUTME: Per-workout aggregation of distinct exercises and total sets
// ABOUTME: Shared by history summaries, workout detail and the dashboard builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::collections::HashSet;

use ironlog_core::models::LoggedSet;
use serde::{Deserialize, Serialize};

/// Counts derived from one workout's sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutCounts {
    /// Distinct `exercise_id` values
    pub exercise_count: usize,
    /// Total sets, repeats of the same exercise included
    pub set_count: usize,
}

/// Count distinct exercises and total sets
///
/// An empty slice yields zero for both counts.
#[must_use]
pub fn aggregate_workout(sets: &[LoggedSet]) -> WorkoutCounts {
    let exercises: HashSet<&str> = sets.iter().map(|set| set.exercise_id.as_str()).collect();
    WorkoutCounts {
        exercise_count: exercises.len(),
        set_count: sets.len(),
    }
}
