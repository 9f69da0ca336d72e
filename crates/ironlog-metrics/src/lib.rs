// ABOUTME: Workout metrics engine converting logged sets into derived performance numbers
// ABOUTME: Hosts the calculator, aggregator, dashboard builder, history paginator and progress series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![deny(unsafe_code)]

//! # IronLog Metrics
//!
//! Every function in this crate is a pure computation over already-fetched
//! workouts: no I/O, no clocks, no shared mutable state. Callers pass
//! "today" explicitly and get identical output for identical input.
//!
//! - [`calculator`]: estimated one-rep-max (Brzycki) and per-set volume
//! - [`aggregator`]: distinct exercise and set counts for one workout
//! - [`dashboard`]: totals and recent workouts over a month window
//! - [`history`]: ordered, offset-paginated workout summaries
//! - [`progress`]: per-exercise trend series for charts

/// One-rep-max and volume formulas
pub mod calculator;

/// Per-workout exercise and set counts
pub mod aggregator;

/// Dashboard summary over a date window
pub mod dashboard;

/// History listing order and pagination
pub mod history;

/// Per-exercise progress series
pub mod progress;

/// Tunable defaults for dashboard and history requests
pub mod config;

pub use aggregator::{aggregate_workout, WorkoutCounts};
pub use calculator::{calculate_one_rep_max, calculate_volume, SetMetrics};
pub use config::{ConfigError, MetricsConfig};
pub use dashboard::{build_dashboard_summary, dashboard_window, DashboardSummary};
pub use history::{paginate, WorkoutListPage, WorkoutSummary};
pub use progress::{exercise_progress, ProgressPoint};
