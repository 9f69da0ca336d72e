// ABOUTME: Per-user exercise catalog with case-insensitive unique names
// ABOUTME: Name claims go through the DashMap entry API so concurrent creates cannot both succeed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::constants::workout::MAX_EXERCISE_NAME_LENGTH;
use crate::errors::{AppError, AppResult};
use crate::models::{normalize_name, Exercise, ExerciseType};

/// `(user_id, normalized name)`
type NameKey = (String, String);

/// Exercise catalog
///
/// Uniqueness is enforced by claiming the normalized name in `names` before
/// the exercise becomes visible. A losing concurrent create gets
/// `ResourceAlreadyExists` instead of a duplicate.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Arc<DashMap<String, Exercise>>,
    names: Arc<DashMap<NameKey, String>>,
}

impl ExerciseCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exercise for `user_id`
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a blank name or one over 100 characters
    /// - `ResourceAlreadyExists` if the user already has an exercise with the
    ///   same name, ignoring case and surrounding whitespace
    pub fn create(
        &self,
        user_id: &str,
        name: &str,
        exercise_type: ExerciseType,
        now: DateTime<Utc>,
    ) -> AppResult<Exercise> {
        let name = validate_name(name)?;
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_owned(),
            name: name.to_owned(),
            exercise_type,
            created_at: now,
        };

        match self.names.entry((user_id.to_owned(), exercise.name_key())) {
            Entry::Occupied(_) => return Err(duplicate_name(user_id, name)),
            Entry::Vacant(slot) => {
                slot.insert(exercise.id.clone());
            }
        }
        self.exercises.insert(exercise.id.clone(), exercise.clone());

        info!(
            user.id = %user_id,
            exercise.id = %exercise.id,
            exercise.kind = %exercise_type,
            "created exercise"
        );
        Ok(exercise)
    }

    /// One exercise owned by `user_id`
    #[must_use]
    pub fn get(&self, user_id: &str, exercise_id: &str) -> Option<Exercise> {
        self.exercises
            .get(exercise_id)
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
    }

    /// All exercises of `user_id`, ordered by normalized name
    #[must_use]
    pub fn list(&self, user_id: &str) -> Vec<Exercise> {
        let mut exercises: Vec<Exercise> = self
            .exercises
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        exercises.sort_by_cached_key(Exercise::name_key);
        exercises
    }

    /// Change the display name of an exercise
    ///
    /// Changing only the letter case keeps the existing name claim.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the exercise does not exist for `user_id`
    /// - `InvalidInput` for an invalid name
    /// - `ResourceAlreadyExists` if another exercise already uses the name
    pub fn rename(&self, user_id: &str, exercise_id: &str, new_name: &str) -> AppResult<Exercise> {
        let new_name = validate_name(new_name)?;
        let mut stored = self
            .exercises
            .get_mut(exercise_id)
            .filter(|entry| entry.user_id == user_id)
            .ok_or_else(|| exercise_not_found(user_id, exercise_id))?;

        let old_key = stored.name_key();
        let new_key = normalize_name(new_name);
        if old_key != new_key {
            match self.names.entry((user_id.to_owned(), new_key)) {
                Entry::Occupied(_) => return Err(duplicate_name(user_id, new_name)),
                Entry::Vacant(slot) => {
                    slot.insert(exercise_id.to_owned());
                }
            }
            self.names.remove(&(user_id.to_owned(), old_key));
        }

        new_name.clone_into(&mut stored.name);
        Ok(stored.value().clone())
    }

    /// Remove an exercise and release its name
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` if the exercise does not exist for `user_id`.
    pub fn delete(&self, user_id: &str, exercise_id: &str) -> AppResult<()> {
        let (_, removed) = self
            .exercises
            .remove_if(exercise_id, |_, exercise| exercise.user_id == user_id)
            .ok_or_else(|| exercise_not_found(user_id, exercise_id))?;
        self.names.remove(&(user_id.to_owned(), removed.name_key()));
        info!(user.id = %user_id, exercise.id = %exercise_id, "deleted exercise");
        Ok(())
    }
}

fn validate_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Exercise name cannot be empty").with_field("name"));
    }
    if name.chars().count() > MAX_EXERCISE_NAME_LENGTH {
        return Err(AppError::invalid_input(format!(
            "Exercise name must be at most {MAX_EXERCISE_NAME_LENGTH} characters"
        ))
        .with_field("name"));
    }
    Ok(name)
}

fn duplicate_name(user_id: &str, name: &str) -> AppError {
    AppError::already_exists(format!("An exercise named '{name}' already exists"))
        .with_user_id(user_id)
        .with_field("name")
}

fn exercise_not_found(user_id: &str, exercise_id: &str) -> AppError {
    AppError::not_found(format!("Exercise {exercise_id}"))
        .with_user_id(user_id)
        .with_resource_id(exercise_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_rename_case_only_keeps_claim() {
        let catalog = ExerciseCatalog::new();
        let now = Utc::now();
        let squat = catalog
            .create("u1", "back squat", ExerciseType::Strength, now)
            .unwrap();

        let renamed = catalog.rename("u1", &squat.id, "Back Squat").unwrap();
        assert_eq!(renamed.name, "Back Squat");

        let error = catalog
            .create("u1", "BACK SQUAT", ExerciseType::Strength, now)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    }

    #[test]
    fn test_blank_name_rejected() {
        let error = ExerciseCatalog::new()
            .create("u1", "   ", ExerciseType::Cardio, Utc::now())
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.field.as_deref(), Some("name"));
    }
}
