// ABOUTME: Service layer combining data sources with the metrics engine
// ABOUTME: Request-level operations for dashboard, history, detail, progress and workout writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

/// Workout queries and writes
pub mod workouts;

pub use workouts::{SetDetail, WorkoutDetail, WorkoutService};
