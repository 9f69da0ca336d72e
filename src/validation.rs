// ABOUTME: Save-time validation of submitted workouts before they reach a data source
// ABOUTME: Checks date, notes and set completeness and assigns sort order in submission order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Workout submission validation
//!
//! Stored sets may be incomplete, but a submitted workout may not: every
//! set must carry both fields for its exercise type. Errors carry the path
//! of the offending field, e.g. `exercises[1].sets[0].reps`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::workout::MAX_NOTES_LENGTH;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseType, LoggedSet, LoggedSetRecord, SetPerformance};
use crate::params::parse_date;

/// One submitted set, fields as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDraft {
    /// Strength load
    #[serde(default)]
    pub weight: Option<f64>,
    /// Strength repetitions
    #[serde(default)]
    pub reps: Option<i32>,
    /// Cardio distance
    #[serde(default)]
    pub distance: Option<f64>,
    /// Cardio time
    #[serde(default)]
    pub time: Option<f64>,
}

impl SetDraft {
    /// Strength set draft
    #[must_use]
    pub const fn strength(weight: f64, reps: i32) -> Self {
        Self {
            weight: Some(weight),
            reps: Some(reps),
            distance: None,
            time: None,
        }
    }

    /// Cardio set draft
    #[must_use]
    pub const fn cardio(distance: f64, time: f64) -> Self {
        Self {
            weight: None,
            reps: None,
            distance: Some(distance),
            time: Some(time),
        }
    }
}

/// Sets submitted for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Catalog exercise the sets belong to
    pub exercise_id: String,
    /// Declared type, decides which set fields are allowed
    pub exercise_type: ExerciseType,
    /// Sets in submission order
    #[serde(default)]
    pub sets: Vec<SetDraft>,
}

/// A workout as submitted for create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    /// Workout date, `YYYY-MM-DD`
    pub date: String,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Exercises in submission order
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

/// A draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedWorkout {
    /// Parsed workout date
    pub date: NaiveDate,
    /// Trimmed notes, `None` when blank
    pub notes: Option<String>,
    /// Sets with `sort_order` assigned across the whole workout
    pub sets: Vec<LoggedSet>,
}

/// Validate `draft` against the calendar date `today`
///
/// # Errors
///
/// - `InvalidFormat` for a malformed date
/// - `InvalidInput` for a future date, no exercises, an exercise without
///   sets, a blank exercise id, or a set carrying fields of the other type
///   or out-of-range values
/// - `ValueOutOfRange` for notes longer than 1000 characters
/// - `MissingRequiredField` for a set missing one of its type's fields
pub fn validate_workout(draft: &WorkoutDraft, today: NaiveDate) -> AppResult<ValidatedWorkout> {
    let date = parse_date("date", &draft.date)?;
    if date > today {
        return Err(
            AppError::invalid_input(format!("Workout date {date} cannot be in the future"))
                .with_field("date"),
        );
    }

    let notes = draft
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty());
    if let Some(notes) = notes {
        if notes.chars().count() > MAX_NOTES_LENGTH {
            return Err(AppError::value_out_of_range(format!(
                "notes must be at most {MAX_NOTES_LENGTH} characters"
            ))
            .with_field("notes"));
        }
    }

    if draft.exercises.is_empty() {
        return Err(
            AppError::invalid_input("Workout must include at least one exercise")
                .with_field("exercises"),
        );
    }

    let mut sets = Vec::new();
    for (exercise_index, entry) in draft.exercises.iter().enumerate() {
        let path = format!("exercises[{exercise_index}]");
        if entry.exercise_id.trim().is_empty() {
            return Err(AppError::missing_field(&format!("{path}.exercise_id")));
        }
        if entry.sets.is_empty() {
            return Err(
                AppError::invalid_input("Each exercise must include at least one set")
                    .with_field(format!("{path}.sets")),
            );
        }
        for (set_index, set) in entry.sets.iter().enumerate() {
            let sort_order = i32::try_from(sets.len())
                .map_err(|_| AppError::value_out_of_range("Too many sets in workout"))?;
            let logged = validate_set(
                entry,
                set,
                sort_order,
                &format!("{path}.sets[{set_index}]"),
            )?;
            sets.push(logged);
        }
    }

    debug!(%date, sets = sets.len(), "validated workout draft");
    Ok(ValidatedWorkout {
        date,
        notes: notes.map(str::to_owned),
        sets,
    })
}

fn validate_set(
    entry: &ExerciseEntry,
    set: &SetDraft,
    sort_order: i32,
    path: &str,
) -> AppResult<LoggedSet> {
    let record = LoggedSetRecord {
        exercise_id: entry.exercise_id.trim().to_owned(),
        exercise_type: entry.exercise_type,
        weight: set.weight,
        reps: set.reps,
        distance: set.distance,
        time: set.time,
        sort_order,
    };
    let logged = LoggedSet::try_from(record)
        .map_err(|error| AppError::from(error).with_field(path.to_owned()))?;

    let missing = match logged.performance {
        SetPerformance::Strength { weight: None, .. } => Some("weight"),
        SetPerformance::Strength { reps: None, .. } => Some("reps"),
        SetPerformance::Cardio { distance: None, .. } => Some("distance"),
        SetPerformance::Cardio { time: None, .. } => Some("time"),
        _ => None,
    };
    if let Some(field) = missing {
        return Err(AppError::missing_field(&format!("{path}.{field}")));
    }

    Ok(logged)
}
