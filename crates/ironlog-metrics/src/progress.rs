// ABOUTME: Per-exercise progress series for dashboard trend charts
// ABOUTME: One point per workout with best estimated 1RM, top weight, volume or cardio totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::NaiveDate;
use ironlog_core::errors::InvalidInputError;
use ironlog_core::models::Workout;
use ironlog_core::pagination::SortOrder;
use serde::{Deserialize, Serialize};

use crate::calculator::{ensure_finite, round_to_cents, SetMetrics};
use crate::history::sort_workouts;

/// One chart point: how an exercise went in one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Workout the point came from
    pub workout_id: String,
    /// Workout date
    pub date: NaiveDate,
    /// Sets logged for the exercise
    pub set_count: usize,
    /// Heaviest complete strength set
    pub max_weight: Option<f64>,
    /// Best Brzycki estimate among complete strength sets
    pub best_estimated_one_rep_max: Option<f64>,
    /// Summed strength volume
    pub total_volume: Option<f64>,
    /// Summed cardio distance
    pub total_distance: Option<f64>,
    /// Summed cardio time
    pub total_time: Option<f64>,
}

fn max_option(current: Option<f64>, candidate: f64) -> Option<f64> {
    Some(current.map_or(candidate, |value| value.max(candidate)))
}

fn add_option(current: Option<f64>, amount: f64) -> Option<f64> {
    Some(current.unwrap_or(0.0) + amount)
}

fn rounded_total(total: Option<f64>) -> Result<Option<f64>, InvalidInputError> {
    total.map(|value| ensure_finite(round_to_cents(value))).transpose()
}

/// Trend series for `exercise_id`, oldest workout first
///
/// Workouts without a set for the exercise are skipped. Incomplete sets
/// count toward `set_count` but not toward any metric.
///
/// # Errors
///
/// Propagates `InvalidInputError` from the calculator, including
/// `ResultNotFinite` when a summed total overflows.
pub fn exercise_progress(
    workouts: &[Workout],
    exercise_id: &str,
) -> Result<Vec<ProgressPoint>, InvalidInputError> {
    let mut points = Vec::new();

    for workout in sort_workouts(workouts, SortOrder::Asc) {
        let mut point = ProgressPoint {
            workout_id: workout.id.clone(),
            date: workout.date,
            set_count: 0,
            max_weight: None,
            best_estimated_one_rep_max: None,
            total_volume: None,
            total_distance: None,
            total_time: None,
        };

        for set in workout.sets_for(exercise_id) {
            point.set_count += 1;
            if let Some((weight, _)) = set.strength_load() {
                point.max_weight = max_option(point.max_weight, weight);
            }
            if let Some(metrics) = SetMetrics::for_set(set)? {
                point.best_estimated_one_rep_max = max_option(
                    point.best_estimated_one_rep_max,
                    metrics.estimated_one_rep_max,
                );
                point.total_volume = add_option(point.total_volume, metrics.volume);
            }
            if let Some((distance, time)) = set.cardio_effort() {
                point.total_distance = add_option(point.total_distance, distance);
                point.total_time = add_option(point.total_time, time);
            }
        }

        if point.set_count > 0 {
            point.total_volume = rounded_total(point.total_volume)?;
            point.total_distance = rounded_total(point.total_distance)?;
            point.total_time = rounded_total(point.total_time)?;
            points.push(point);
        }
    }

    Ok(points)
}
