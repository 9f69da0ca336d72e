// ABOUTME: Workout model: a dated collection of logged sets owned by one user
// ABOUTME: Provides exercise membership helpers used by filters and aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::set::LoggedSet;

/// A dated training session and the sets logged in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Calendar date the workout took place on
    pub date: NaiveDate,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// When the workout was first saved (ordering tie-break)
    pub created_at: DateTime<Utc>,
    /// When the workout was last saved
    pub updated_at: DateTime<Utc>,
    /// Logged sets in save order
    #[serde(default)]
    pub sets: Vec<LoggedSet>,
}

impl Workout {
    /// Create a workout saved at `created_at`
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        date: NaiveDate,
        created_at: DateTime<Utc>,
        sets: Vec<LoggedSet>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date,
            notes: None,
            created_at,
            updated_at: created_at,
            sets,
        }
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Whether any set in the workout was for `exercise_id`
    #[must_use]
    pub fn contains_exercise(&self, exercise_id: &str) -> bool {
        self.sets.iter().any(|set| set.exercise_id == exercise_id)
    }

    /// Sets for one exercise, in save order
    pub fn sets_for<'a>(&'a self, exercise_id: &'a str) -> impl Iterator<Item = &'a LoggedSet> {
        self.sets
            .iter()
            .filter(move |set| set.exercise_id == exercise_id)
    }
}
