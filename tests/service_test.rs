// ABOUTME: Integration tests for WorkoutService over the in-memory store
// ABOUTME: Exercises dashboard windows, history, detail metrics, progress and the write path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, cardio, date, init_test_logging, strength, strength_draft, workout};
use ironlog::config::MetricsConfig;
use ironlog::errors::ErrorCode;
use ironlog::params::{DashboardQuery, HistoryQuery};
use ironlog::services::WorkoutService;
use ironlog::store::memory::InMemoryStore;
use ironlog::store::WorkoutSource;

fn seeded_service() -> WorkoutService<InMemoryStore> {
    init_test_logging();
    let store = InMemoryStore::with_workouts([
        workout("old", "u1", date(2025, 1, 29), vec![strength("squat", 140.0, 5)]),
        workout(
            "edge",
            "u1",
            date(2025, 1, 30),
            vec![strength("squat", 100.0, 5), strength("bench", 80.0, 8)],
        ),
        workout(
            "mid",
            "u1",
            date(2025, 3, 15),
            vec![strength("bench", 100.0, 8), cardio("run", 5.0, 1500.0)],
        ),
        workout("last", "u1", date(2025, 4, 30), vec![strength("squat", 120.0, 3)]),
        workout("other", "u2", date(2025, 4, 1), vec![strength("squat", 200.0, 1)]),
    ]);
    WorkoutService::new(store, MetricsConfig::default())
}

#[tokio::test]
async fn test_dashboard_uses_inclusive_window() {
    let service = seeded_service();
    let summary = service
        .dashboard("u1", &DashboardQuery::default(), date(2025, 4, 30))
        .await
        .unwrap();

    assert_eq!(summary.period.start_date, date(2025, 1, 30));
    assert_eq!(summary.period.end_date, date(2025, 4, 30));
    assert_eq!(summary.period.months, 3);
    assert_eq!(summary.summary.total_workouts, 3);
    assert_eq!(summary.summary.total_sets, 5);
    assert_eq!(summary.summary.unique_exercises, 3);
    // 500 + 640 + 800 + 360
    assert!((summary.summary.total_volume - 2300.0).abs() < f64::EPSILON);

    let ids: Vec<&str> = summary
        .recent_workouts
        .iter()
        .map(|recent| recent.id.as_str())
        .collect();
    assert_eq!(ids, vec!["last", "mid", "edge"]);
}

#[tokio::test]
async fn test_dashboard_rejects_bad_months() {
    let service = seeded_service();
    let error = service
        .dashboard("u1", &DashboardQuery::with_months("24"), date(2025, 4, 30))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_dashboard_for_user_without_workouts() {
    let service = seeded_service();
    let summary = service
        .dashboard("nobody", &DashboardQuery::with_months("1"), date(2025, 4, 30))
        .await
        .unwrap();
    assert_eq!(summary.summary.total_workouts, 0);
    assert!(summary.recent_workouts.is_empty());
}

#[tokio::test]
async fn test_history_filters_by_exercise() {
    let service = seeded_service();
    let page = service
        .history(
            "u1",
            &HistoryQuery {
                exercise_id: Some("bench".into()),
                order: Some("asc".into()),
                ..HistoryQuery::default()
            },
        )
        .await
        .unwrap();

    let ids: Vec<&str> = page.workouts.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["edge", "mid"]);
    assert_eq!(page.pagination.total, 2);
    assert!(!page.pagination.has_more);
}

#[tokio::test]
async fn test_history_date_range_and_paging() {
    let service = seeded_service();
    let page = service
        .history(
            "u1",
            &HistoryQuery {
                start_date: Some("2025-01-01".into()),
                end_date: Some("2025-03-31".into()),
                limit: Some("2".into()),
                ..HistoryQuery::default()
            },
        )
        .await
        .unwrap();

    let ids: Vec<&str> = page.workouts.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["mid", "edge"]);
    assert_eq!(page.pagination.total, 3);
    assert!(page.pagination.has_more);
}

#[tokio::test]
async fn test_detail_includes_set_metrics() {
    let service = seeded_service();
    let detail = service.detail("u1", "mid").await.unwrap();

    assert_eq!(detail.summary.exercise_count, 2);
    assert_eq!(detail.sets.len(), 2);
    assert_eq!(detail.sets[0].volume, Some(800.0));
    assert_eq!(detail.sets[0].estimated_one_rep_max, Some(124.16));
    assert_eq!(detail.sets[1].volume, None);
    assert_eq!(detail.sets[1].estimated_one_rep_max, None);

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["id"], "mid");
    assert_eq!(json["sets"][0]["exercise_id"], "bench");
    assert_eq!(json["sets"][0]["weight"], 100.0);
}

#[tokio::test]
async fn test_detail_hides_other_users_workouts() {
    let service = seeded_service();
    let error = service.detail("u1", "other").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.http_status(), 404);
}

#[tokio::test]
async fn test_progress_series() {
    let service = seeded_service();
    let points = service
        .progress("u1", "squat", &DashboardQuery::default(), date(2025, 4, 30))
        .await
        .unwrap();

    let ids: Vec<&str> = points.iter().map(|p| p.workout_id.as_str()).collect();
    assert_eq!(ids, vec!["edge", "last"]);
    assert_eq!(points[1].max_weight, Some(120.0));
}

#[tokio::test]
async fn test_create_update_delete_cycle() {
    init_test_logging();
    let service = WorkoutService::new(InMemoryStore::new(), MetricsConfig::default());
    let today = date(2025, 4, 30);
    let created_at = at(2025, 4, 30, 7, 0);

    let created = service
        .create("u1", &strength_draft("2025-04-29", "bench", 3), today, created_at)
        .await
        .unwrap();
    assert_eq!(created.sets.len(), 3);
    assert_eq!(created.created_at, created_at);
    assert_eq!(created.updated_at, created_at);
    assert_eq!(service.source().len(), 1);

    let mut draft = strength_draft("2025-04-30", "squat", 1);
    draft.notes = Some("moved".into());
    let updated_at = at(2025, 4, 30, 9, 30);
    let updated = service
        .update("u1", &created.id, &draft, today, updated_at)
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created_at);
    assert_eq!(updated.updated_at, updated_at);
    assert_eq!(updated.date, today);
    assert_eq!(updated.notes.as_deref(), Some("moved"));
    assert_eq!(updated.sets.len(), 1);

    let stored = service.source().get_workout("u1", &created.id).await.unwrap();
    assert_eq!(stored, Some(updated));

    let error = service.delete("u2", &created.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    service.delete("u1", &created.id).await.unwrap();
    assert!(service.source().is_empty());
    let error = service.delete("u1", &created.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_invalid_draft_is_not_stored() {
    let service = WorkoutService::new(InMemoryStore::new(), MetricsConfig::default());
    let mut draft = strength_draft("2025-04-29", "bench", 2);
    draft.exercises[0].sets[1].weight = None;

    let error = service
        .create("u1", &draft, date(2025, 4, 30), at(2025, 4, 30, 7, 0))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(service.source().is_empty());
}

#[tokio::test]
async fn test_update_unknown_workout() {
    let service = seeded_service();
    let error = service
        .update(
            "u1",
            "missing",
            &strength_draft("2025-04-01", "bench", 1),
            date(2025, 4, 30),
            at(2025, 4, 30, 7, 0),
        )
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_dashboard_volume_overflow_is_bad_input() {
    let sets = (0..200).map(|_| strength("squat", 1e304, 100)).collect();
    let store = InMemoryStore::with_workouts([workout("heavy", "u1", date(2025, 4, 1), sets)]);
    let service = WorkoutService::new(store, MetricsConfig::default());

    let error = service
        .dashboard("u1", &DashboardQuery::default(), date(2025, 4, 30))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.message, "Result is too large to represent");
}
