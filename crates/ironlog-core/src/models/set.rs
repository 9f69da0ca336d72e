// ABOUTME: Logged set model with a tagged union for strength and cardio performance
// ABOUTME: Converts to and from the flat JSON wire form, rejecting mismatched fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, InvalidInputError};

/// Kind of exercise a set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Weight and reps
    Strength,
    /// Distance and time
    Cardio,
}

impl ExerciseType {
    /// Wire name of the exercise type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise type: '{other}'. Valid options: strength, cardio"
            ))),
        }
    }
}

/// What was performed in a set
///
/// Each variant carries only the fields that are meaningful for its exercise
/// type, so a strength set can never hold a distance and a cardio set can
/// never hold reps. Fields stay optional because stored sets may be
/// incomplete; incomplete sets contribute nothing to derived metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetPerformance {
    /// Resistance work
    Strength {
        /// Load lifted
        weight: Option<f64>,
        /// Repetitions performed
        reps: Option<i32>,
    },
    /// Endurance work
    Cardio {
        /// Distance covered
        distance: Option<f64>,
        /// Time taken
        time: Option<f64>,
    },
}

impl SetPerformance {
    /// Complete strength set with the given load
    #[must_use]
    pub const fn strength(weight: f64, reps: i32) -> Self {
        Self::Strength {
            weight: Some(weight),
            reps: Some(reps),
        }
    }

    /// Complete cardio set
    #[must_use]
    pub const fn cardio(distance: f64, time: f64) -> Self {
        Self::Cardio {
            distance: Some(distance),
            time: Some(time),
        }
    }

    /// Exercise type implied by the variant
    #[must_use]
    pub const fn exercise_type(&self) -> ExerciseType {
        match self {
            Self::Strength { .. } => ExerciseType::Strength,
            Self::Cardio { .. } => ExerciseType::Cardio,
        }
    }

    /// Whether both fields of the variant are present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        match self {
            Self::Strength { weight, reps } => weight.is_some() && reps.is_some(),
            Self::Cardio { distance, time } => distance.is_some() && time.is_some(),
        }
    }

    /// Check value ranges on whichever fields are present
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` for non-positive reps or for a weight,
    /// distance or time that is negative or not finite.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        match *self {
            Self::Strength { weight, reps } => {
                if reps.is_some_and(|r| r <= 0) {
                    return Err(InvalidInputError::RepsNotPositive);
                }
                if weight.is_some_and(is_negative_or_non_finite) {
                    return Err(InvalidInputError::NegativeWeight);
                }
            }
            Self::Cardio { distance, time } => {
                if distance.is_some_and(is_negative_or_non_finite) {
                    return Err(InvalidInputError::NegativeDistance);
                }
                if time.is_some_and(is_negative_or_non_finite) {
                    return Err(InvalidInputError::NegativeTime);
                }
            }
        }
        Ok(())
    }
}

fn is_negative_or_non_finite(value: f64) -> bool {
    value < 0.0 || !value.is_finite()
}

/// One performance entry within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LoggedSetRecord", into = "LoggedSetRecord")]
pub struct LoggedSet {
    /// Exercise performed (opaque catalog key)
    pub exercise_id: String,
    /// Display and save order within the workout
    pub sort_order: i32,
    /// Performance data for the set
    pub performance: SetPerformance,
}

impl LoggedSet {
    /// Create a set after checking its value ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if the performance data is out of range
    pub fn new(
        exercise_id: impl Into<String>,
        sort_order: i32,
        performance: SetPerformance,
    ) -> Result<Self, InvalidInputError> {
        performance.validate()?;
        Ok(Self {
            exercise_id: exercise_id.into(),
            sort_order,
            performance,
        })
    }

    /// Complete strength set at sort position 0
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` for `reps <= 0` or a negative weight
    pub fn strength(
        exercise_id: impl Into<String>,
        weight: f64,
        reps: i32,
    ) -> Result<Self, InvalidInputError> {
        Self::new(exercise_id, 0, SetPerformance::strength(weight, reps))
    }

    /// Complete cardio set at sort position 0
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` for a negative distance or time
    pub fn cardio(
        exercise_id: impl Into<String>,
        distance: f64,
        time: f64,
    ) -> Result<Self, InvalidInputError> {
        Self::new(exercise_id, 0, SetPerformance::cardio(distance, time))
    }

    /// Set the sort position
    #[must_use]
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Exercise type implied by the performance variant
    #[must_use]
    pub const fn exercise_type(&self) -> ExerciseType {
        self.performance.exercise_type()
    }

    /// Weight and reps, when this is a complete strength set
    #[must_use]
    pub const fn strength_load(&self) -> Option<(f64, i32)> {
        match self.performance {
            SetPerformance::Strength {
                weight: Some(weight),
                reps: Some(reps),
            } => Some((weight, reps)),
            _ => None,
        }
    }

    /// Distance and time, when this is a complete cardio set
    #[must_use]
    pub const fn cardio_effort(&self) -> Option<(f64, f64)> {
        match self.performance {
            SetPerformance::Cardio {
                distance: Some(distance),
                time: Some(time),
            } => Some((distance, time)),
            _ => None,
        }
    }
}

/// Flat wire form of a [`LoggedSet`]
///
/// Matches the row shape stored by the data source: every metric column is
/// nullable and `exercise_type` says which pair is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedSetRecord {
    /// Exercise performed
    pub exercise_id: String,
    /// Declared exercise type
    pub exercise_type: ExerciseType,
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
    /// Display and save order
    #[serde(default)]
    pub sort_order: i32,
}

impl TryFrom<LoggedSetRecord> for LoggedSet {
    type Error = InvalidInputError;

    fn try_from(record: LoggedSetRecord) -> Result<Self, Self::Error> {
        let kind = record.exercise_type;
        let performance = match kind {
            ExerciseType::Strength => {
                reject_field(kind, "distance", record.distance.is_some())?;
                reject_field(kind, "time", record.time.is_some())?;
                SetPerformance::Strength {
                    weight: record.weight,
                    reps: record.reps,
                }
            }
            ExerciseType::Cardio => {
                reject_field(kind, "weight", record.weight.is_some())?;
                reject_field(kind, "reps", record.reps.is_some())?;
                SetPerformance::Cardio {
                    distance: record.distance,
                    time: record.time,
                }
            }
        };
        Self::new(record.exercise_id, record.sort_order, performance)
    }
}

fn reject_field(
    exercise_type: ExerciseType,
    field: &'static str,
    present: bool,
) -> Result<(), InvalidInputError> {
    if present {
        return Err(InvalidInputError::FieldTypeMismatch {
            exercise_type: exercise_type.as_str(),
            field,
        });
    }
    Ok(())
}

impl From<LoggedSet> for LoggedSetRecord {
    fn from(set: LoggedSet) -> Self {
        let (weight, reps, distance, time) = match set.performance {
            SetPerformance::Strength { weight, reps } => (weight, reps, None, None),
            SetPerformance::Cardio { distance, time } => (None, None, distance, time),
        };
        Self {
            exercise_id: set.exercise_id,
            exercise_type: set.performance.exercise_type(),
            weight,
            reps,
            distance,
            time,
            sort_order: set.sort_order,
        }
    }
}
