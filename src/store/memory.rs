// ABOUTME: In-memory workout store on a sharded concurrent map
// ABOUTME: Implements WorkoutSource and loads or saves JSON snapshot files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use super::WorkoutSource;
use crate::errors::{AppError, AppResult};
use crate::models::{Workout, WorkoutFilter};

/// On-disk snapshot layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Every stored workout
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

/// Workout store keyed by workout id
///
/// Clones share the same map. Each workout is written as a whole, so readers
/// never observe a workout with half of its sets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    workouts: Arc<DashMap<String, Workout>>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `workouts`; later duplicates of an id replace earlier ones
    #[must_use]
    pub fn with_workouts(workouts: impl IntoIterator<Item = Workout>) -> Self {
        let store = Self::new();
        for workout in workouts {
            store.workouts.insert(workout.id.clone(), workout);
        }
        store
    }

    /// Number of stored workouts across all users
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the store holds no workouts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Copy of every workout, ordered by user, date, creation time and id
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        workouts.sort_by(|a, b| {
            a.user_id
                .cmp(&b.user_id)
                .then_with(|| a.date.cmp(&b.date))
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        StoreSnapshot { workouts }
    }

    /// Load a store from a JSON snapshot file
    ///
    /// # Errors
    ///
    /// `StorageError` if the file cannot be read, `SerializationError` if it
    /// is not a valid snapshot (including sets with mismatched fields).
    pub async fn load_snapshot(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).await.map_err(|error| {
            AppError::storage(format!("Failed to read snapshot {}", path.display()))
                .with_source(error)
        })?;
        let snapshot: StoreSnapshot = serde_json::from_slice(&bytes)?;
        info!(
            path = %path.display(),
            workouts = snapshot.workouts.len(),
            "loaded workout snapshot"
        );
        Ok(Self::with_workouts(snapshot.workouts))
    }

    /// Write every workout to a JSON snapshot file
    ///
    /// # Errors
    ///
    /// `StorageError` if the file cannot be written.
    pub async fn save_snapshot(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let snapshot = self.snapshot();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        fs::write(path, bytes).await.map_err(|error| {
            AppError::storage(format!("Failed to write snapshot {}", path.display()))
                .with_source(error)
        })?;
        info!(
            path = %path.display(),
            workouts = snapshot.workouts.len(),
            "saved workout snapshot"
        );
        Ok(())
    }
}

#[async_trait]
impl WorkoutSource for InMemoryStore {
    async fn fetch_workouts(
        &self,
        user_id: &str,
        filter: &WorkoutFilter,
    ) -> AppResult<Vec<Workout>> {
        let workouts: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|entry| entry.user_id == user_id && filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        debug!(user.id = %user_id, matched = workouts.len(), "fetched workouts");
        Ok(workouts)
    }

    async fn get_workout(&self, user_id: &str, workout_id: &str) -> AppResult<Option<Workout>> {
        Ok(self
            .workouts
            .get(workout_id)
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn insert_workout(&self, workout: &Workout) -> AppResult<()> {
        match self.workouts.entry(workout.id.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "Workout {} already exists",
                workout.id
            ))
            .with_resource_id(workout.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(workout.clone());
                Ok(())
            }
        }
    }

    async fn replace_workout(&self, workout: &Workout) -> AppResult<()> {
        match self.workouts.get_mut(&workout.id) {
            Some(mut stored) if stored.user_id == workout.user_id => {
                *stored = workout.clone();
                Ok(())
            }
            _ => Err(AppError::not_found(format!("Workout {}", workout.id))
                .with_user_id(workout.user_id.clone())
                .with_resource_id(workout.id.clone())),
        }
    }

    async fn delete_workout(&self, user_id: &str, workout_id: &str) -> AppResult<bool> {
        Ok(self
            .workouts
            .remove_if(workout_id, |_, stored| stored.user_id == user_id)
            .is_some())
    }
}
