// ABOUTME: Core data models for the IronLog workout tracker
// ABOUTME: Re-exports LoggedSet, SetPerformance, ExerciseType, Workout and Exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! # Data Models
//!
//! - `LoggedSet`: one strength or cardio entry within a workout
//! - `SetPerformance`: tagged union holding only the fields valid for its type
//! - `Workout`: a dated collection of sets for one user
//! - `Exercise`: a catalog entry sets refer to

mod exercise;
mod set;
mod workout;

pub use exercise::{normalize_name, Exercise};
pub use set::{ExerciseType, LoggedSet, LoggedSetRecord, SetPerformance};
pub use workout::Workout;
