// ABOUTME: WorkoutService: validates requests, fetches from a WorkoutSource and runs the metrics engine
// ABOUTME: Owns id and timestamp assignment for created and updated workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Workout service
//!
//! Each read fetches its own snapshot from the source and hands it to the
//! pure engine functions, so concurrent requests share no state beyond the
//! source itself. "Today" and "now" are always passed in by the caller.

use chrono::{DateTime, NaiveDate, Utc};
use ironlog_metrics::config::MetricsConfig;
use ironlog_metrics::dashboard::{build_dashboard_summary, dashboard_window, DashboardSummary};
use ironlog_metrics::history::{paginate, WorkoutListPage, WorkoutSummary};
use ironlog_metrics::progress::{exercise_progress, ProgressPoint};
use ironlog_metrics::SetMetrics;
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{LoggedSet, Workout, WorkoutFilter};
use crate::params::{DashboardQuery, HistoryQuery};
use crate::store::WorkoutSource;
use crate::validation::{validate_workout, WorkoutDraft};

/// A logged set with its derived strength metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetDetail {
    /// The set in its flat wire form
    #[serde(flatten)]
    pub set: LoggedSet,
    /// `weight x reps`, for complete strength sets
    pub volume: Option<f64>,
    /// Brzycki estimate, for complete strength sets
    pub estimated_one_rep_max: Option<f64>,
}

/// Single workout view: list summary plus every set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDetail {
    /// Same fields as the history row
    #[serde(flatten)]
    pub summary: WorkoutSummary,
    /// Sets in `sort_order`
    pub sets: Vec<SetDetail>,
}

/// Request-level workout operations over a [`WorkoutSource`]
#[derive(Debug, Clone)]
pub struct WorkoutService<S> {
    source: S,
    config: MetricsConfig,
}

impl<S: WorkoutSource> WorkoutService<S> {
    /// Create a service with request defaults from `config`
    #[must_use]
    pub const fn new(source: S, config: MetricsConfig) -> Self {
        Self { source, config }
    }

    /// Underlying data source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Request defaults in use
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Dashboard summary for the window of `months` ending `today`
    ///
    /// The summary is built on the blocking pool since the builder fans the
    /// per-workout tallies out over rayon.
    ///
    /// # Errors
    ///
    /// Parameter validation errors, data source errors, `InvalidInput` if a
    /// stored set holds out-of-range values, or `InternalError` if the build
    /// task panics.
    pub async fn dashboard(
        &self,
        user_id: &str,
        query: &DashboardQuery,
        today: NaiveDate,
    ) -> AppResult<DashboardSummary> {
        let params = query.resolve(&self.config.dashboard)?;
        let (start, end) = dashboard_window(today, params.months);
        let workouts = self
            .source
            .fetch_workouts(user_id, &WorkoutFilter::between(start, end))
            .await?;

        debug!(
            user.id = %user_id,
            months = params.months,
            workouts = workouts.len(),
            "dashboard request"
        );
        let summary = task::spawn_blocking(move || {
            build_dashboard_summary(&workouts, params.months, today)
        })
        .await
        .map_err(|error| {
            AppError::internal("Dashboard summary task failed").with_source(error)
        })??;
        Ok(summary)
    }

    /// One page of the history list
    ///
    /// # Errors
    ///
    /// Parameter validation errors or data source errors.
    pub async fn history(&self, user_id: &str, query: &HistoryQuery) -> AppResult<WorkoutListPage> {
        let params = query.resolve(&self.config.history)?;
        let workouts = self.source.fetch_workouts(user_id, &params.filter).await?;
        Ok(paginate(&workouts, params.limit, params.offset, params.order))
    }

    /// Full view of one workout
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` if the workout does not exist for `user_id`.
    pub async fn detail(&self, user_id: &str, workout_id: &str) -> AppResult<WorkoutDetail> {
        let workout = self.require(user_id, workout_id).await?;

        let mut sets: Vec<&LoggedSet> = workout.sets.iter().collect();
        sets.sort_by_key(|set| set.sort_order);
        let sets = sets
            .into_iter()
            .map(|set| -> AppResult<SetDetail> {
                let metrics = SetMetrics::for_set(set)?;
                Ok(SetDetail {
                    set: set.clone(),
                    volume: metrics.map(|m| m.volume),
                    estimated_one_rep_max: metrics.map(|m| m.estimated_one_rep_max),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(WorkoutDetail {
            summary: WorkoutSummary::from(&workout),
            sets,
        })
    }

    /// Per-workout trend for one exercise over a dashboard-style window
    ///
    /// # Errors
    ///
    /// Parameter validation errors or data source errors.
    pub async fn progress(
        &self,
        user_id: &str,
        exercise_id: &str,
        query: &DashboardQuery,
        today: NaiveDate,
    ) -> AppResult<Vec<ProgressPoint>> {
        let params = query.resolve(&self.config.dashboard)?;
        let (start, end) = dashboard_window(today, params.months);
        let filter = WorkoutFilter::between(start, end).with_exercise(exercise_id);
        let workouts = self.source.fetch_workouts(user_id, &filter).await?;
        Ok(exercise_progress(&workouts, exercise_id)?)
    }

    /// Validate and store a new workout
    ///
    /// # Errors
    ///
    /// Validation errors from [`validate_workout`] or data source errors.
    pub async fn create(
        &self,
        user_id: &str,
        draft: &WorkoutDraft,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<Workout> {
        let validated = validate_workout(draft, today)?;
        let workout = Workout {
            notes: validated.notes,
            ..Workout::new(
                Uuid::new_v4().to_string(),
                user_id,
                validated.date,
                now,
                validated.sets,
            )
        };
        self.source.insert_workout(&workout).await?;

        info!(
            user.id = %user_id,
            workout.id = %workout.id,
            workout.date = %workout.date,
            sets = workout.sets.len(),
            "created workout"
        );
        Ok(workout)
    }

    /// Replace the contents of an existing workout
    ///
    /// Keeps `id` and `created_at`; sets `updated_at` to `now`.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown workout, validation errors, or data
    /// source errors.
    pub async fn update(
        &self,
        user_id: &str,
        workout_id: &str,
        draft: &WorkoutDraft,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<Workout> {
        let existing = self.require(user_id, workout_id).await?;
        let validated = validate_workout(draft, today)?;
        let workout = Workout {
            date: validated.date,
            notes: validated.notes,
            sets: validated.sets,
            updated_at: now,
            ..existing
        };
        self.source.replace_workout(&workout).await?;

        info!(user.id = %user_id, workout.id = %workout_id, "updated workout");
        Ok(workout)
    }

    /// Delete a workout
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` if the workout does not exist for `user_id`.
    pub async fn delete(&self, user_id: &str, workout_id: &str) -> AppResult<()> {
        if !self.source.delete_workout(user_id, workout_id).await? {
            return Err(workout_not_found(user_id, workout_id));
        }
        info!(user.id = %user_id, workout.id = %workout_id, "deleted workout");
        Ok(())
    }

    async fn require(&self, user_id: &str, workout_id: &str) -> AppResult<Workout> {
        self.source
            .get_workout(user_id, workout_id)
            .await?
            .ok_or_else(|| workout_not_found(user_id, workout_id))
    }
}

fn workout_not_found(user_id: &str, workout_id: &str) -> AppError {
    AppError::not_found(format!("Workout {workout_id}"))
        .with_user_id(user_id)
        .with_resource_id(workout_id)
}
