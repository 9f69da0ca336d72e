// ABOUTME: Data source abstraction for loading and saving workouts
// ABOUTME: Defines the WorkoutSource trait and hosts the in-memory store and exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{Workout, WorkoutFilter};

/// Per-user exercise catalog with atomic name uniqueness
pub mod catalog;
/// `DashMap`-backed workout store with JSON snapshots
pub mod memory;

/// Workout persistence seam
///
/// Implementations own filtering: `fetch_workouts` must apply the
/// [`WorkoutFilter`] contract (inclusive date bounds, exercise membership)
/// before returning. Result order is unspecified; the metrics engine sorts.
#[async_trait]
pub trait WorkoutSource: Send + Sync {
    /// Workouts of `user_id` matching `filter`
    async fn fetch_workouts(&self, user_id: &str, filter: &WorkoutFilter)
        -> AppResult<Vec<Workout>>;

    /// One workout, `None` if absent or owned by another user
    async fn get_workout(&self, user_id: &str, workout_id: &str) -> AppResult<Option<Workout>>;

    /// Store a new workout with all of its sets
    ///
    /// Fails with `ResourceAlreadyExists` if the id is taken.
    async fn insert_workout(&self, workout: &Workout) -> AppResult<()>;

    /// Overwrite an existing workout and its sets as one unit
    ///
    /// Fails with `ResourceNotFound` if the id is unknown for the owner.
    async fn replace_workout(&self, workout: &Workout) -> AppResult<()>;

    /// Remove a workout, returning whether it existed for `user_id`
    async fn delete_workout(&self, user_id: &str, workout_id: &str) -> AppResult<bool>;
}
