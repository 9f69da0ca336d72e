// ABOUTME: Exercise catalog entry owned by a user
// ABOUTME: Names are unique per user, compared case-insensitively after trimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::set::ExerciseType;

/// A user-defined exercise that sets refer to by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Whether sets for this exercise record weight/reps or distance/time
    pub exercise_type: ExerciseType,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    /// Key used for per-user name uniqueness
    #[must_use]
    pub fn name_key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Trimmed, lowercased form of an exercise name
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
