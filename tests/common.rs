// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and workout/set builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`

use std::env;
use std::sync::Once;

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use ironlog::models::{ExerciseType, LoggedSet, Workout};
use ironlog::validation::{ExerciseEntry, SetDraft, WorkoutDraft};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn strength(exercise_id: &str, weight: f64, reps: i32) -> LoggedSet {
    LoggedSet::strength(exercise_id, weight, reps).unwrap()
}

pub fn cardio(exercise_id: &str, distance: f64, time: f64) -> LoggedSet {
    LoggedSet::cardio(exercise_id, distance, time).unwrap()
}

/// Workout created at noon on its own date
pub fn workout(id: &str, user_id: &str, day: NaiveDate, sets: Vec<LoggedSet>) -> Workout {
    let created_at = day.and_hms_opt(12, 0, 0).unwrap().and_utc();
    let sets = sets
        .into_iter()
        .enumerate()
        .map(|(index, set)| set.with_sort_order(i32::try_from(index).unwrap()))
        .collect();
    Workout::new(id, user_id, day, created_at, sets)
}

/// `count` single-set workouts on consecutive days starting `first`
pub fn daily_workouts(user_id: &str, first: NaiveDate, count: u32) -> Vec<Workout> {
    (0..count)
        .map(|offset| {
            let day = first + Days::new(u64::from(offset));
            workout(
                &format!("w{offset:02}"),
                user_id,
                day,
                vec![strength("squat", 100.0, 5)],
            )
        })
        .collect()
}

/// Draft with one strength exercise of `sets` identical sets
pub fn strength_draft(day: &str, exercise_id: &str, sets: usize) -> WorkoutDraft {
    WorkoutDraft {
        date: day.to_owned(),
        notes: None,
        exercises: vec![ExerciseEntry {
            exercise_id: exercise_id.to_owned(),
            exercise_type: ExerciseType::Strength,
            sets: vec![SetDraft::strength(100.0, 5); sets],
        }],
    }
}
