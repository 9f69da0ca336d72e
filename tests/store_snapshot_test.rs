// ABOUTME: Integration tests for the in-memory store and its JSON snapshot files
// ABOUTME: Covers save/load through temp files, malformed input and owner scoping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;

use common::{cardio, date, strength, workout};
use ironlog::errors::ErrorCode;
use ironlog::models::WorkoutFilter;
use ironlog::store::memory::InMemoryStore;
use ironlog::store::WorkoutSource;
use tempfile::TempDir;

#[tokio::test]
async fn test_snapshot_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.json");

    let original = InMemoryStore::with_workouts([
        workout(
            "a",
            "u1",
            date(2025, 3, 1),
            vec![strength("bench", 100.0, 5), cardio("row", 2.0, 480.0)],
        )
        .with_notes("felt strong"),
        workout("b", "u2", date(2025, 3, 2), vec![strength("squat", 140.0, 3)]),
    ]);
    original.save_snapshot(&path).await.unwrap();

    let loaded = InMemoryStore::load_snapshot(&path).await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(
        loaded.snapshot().workouts,
        original.snapshot().workouts
    );

    let a = loaded.get_workout("u1", "a").await.unwrap().unwrap();
    assert_eq!(a.notes.as_deref(), Some("felt strong"));
    assert_eq!(a.sets[1].sort_order, 1);
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let error = InMemoryStore::load_snapshot(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_mismatched_set_fields_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{"workouts":[{"id":"a","user_id":"u1","date":"2025-03-01",
            "created_at":"2025-03-01T12:00:00Z","updated_at":"2025-03-01T12:00:00Z",
            "sets":[{"exercise_id":"bench","exercise_type":"strength",
                     "weight":100.0,"reps":5,"distance":3.0}]}]}"#,
    )
    .unwrap();

    let error = InMemoryStore::load_snapshot(&path).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_incomplete_stored_sets_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(
        &path,
        r#"{"workouts":[{"id":"a","user_id":"u1","date":"2025-03-01",
            "created_at":"2025-03-01T12:00:00Z","updated_at":"2025-03-01T12:00:00Z",
            "sets":[{"exercise_id":"bench","exercise_type":"strength","weight":100.0}]}]}"#,
    )
    .unwrap();

    let store = InMemoryStore::load_snapshot(&path).await.unwrap();
    let workouts = store
        .fetch_workouts("u1", &WorkoutFilter::all())
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].sets.len(), 1);
}

#[tokio::test]
async fn test_insert_and_replace_rules() {
    let store = InMemoryStore::new();
    let first = workout("a", "u1", date(2025, 3, 1), vec![strength("bench", 100.0, 5)]);
    store.insert_workout(&first).await.unwrap();

    let error = store.insert_workout(&first).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);

    let stranger = workout("a", "u2", date(2025, 3, 1), vec![]);
    let error = store.replace_workout(&stranger).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    assert!(!store.delete_workout("u2", "a").await.unwrap());
    assert!(store.delete_workout("u1", "a").await.unwrap());
    assert!(store.is_empty());
}
