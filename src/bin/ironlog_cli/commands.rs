// ABOUTME: Command implementations for the IronLog CLI
// ABOUTME: Each command returns a JSON value that main prints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use ironlog::config::environment::ServerConfig;
use ironlog::metrics::{calculate_one_rep_max, calculate_volume};
use ironlog::params::{parse_date, DashboardQuery, HistoryQuery};
use ironlog::services::WorkoutService;
use ironlog::store::memory::InMemoryStore;
use serde_json::{json, Value};

type Service = WorkoutService<InMemoryStore>;

pub fn one_rep_max(weight: f64, reps: i32) -> Result<Value> {
    let estimate = calculate_one_rep_max(weight, reps)?;
    Ok(json!({ "weight": weight, "reps": reps, "estimated_one_rep_max": estimate }))
}

pub fn volume(weight: f64, reps: i32) -> Result<Value> {
    let volume = calculate_volume(weight, reps)?;
    Ok(json!({ "weight": weight, "reps": reps, "volume": volume }))
}

pub async fn load_service(config: &ServerConfig, data: Option<PathBuf>) -> Result<Service> {
    let path = data
        .or_else(|| config.data_file.clone())
        .ok_or_else(|| anyhow!("No snapshot file given: pass --data or set IRONLOG_DATA_FILE"))?;
    let store = InMemoryStore::load_snapshot(&path).await?;
    Ok(WorkoutService::new(store, config.metrics.clone()))
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    Ok(match today {
        Some(raw) => parse_date("today", raw)?,
        None => Utc::now().date_naive(),
    })
}

fn window_query(months: Option<String>) -> DashboardQuery {
    DashboardQuery { months }
}

pub async fn dashboard(
    service: &Service,
    user_id: &str,
    months: Option<String>,
    today: Option<&str>,
) -> Result<Value> {
    let today = resolve_today(today)?;
    let summary = service
        .dashboard(user_id, &window_query(months), today)
        .await?;
    Ok(serde_json::to_value(summary)?)
}

pub async fn history(service: &Service, user_id: &str, query: &HistoryQuery) -> Result<Value> {
    let page = service.history(user_id, query).await?;
    Ok(serde_json::to_value(page)?)
}

pub async fn progress(
    service: &Service,
    user_id: &str,
    exercise_id: &str,
    months: Option<String>,
    today: Option<&str>,
) -> Result<Value> {
    let today = resolve_today(today)?;
    let points = service
        .progress(user_id, exercise_id, &window_query(months), today)
        .await?;
    Ok(json!({ "exercise_id": exercise_id, "points": points }))
}
