// ABOUTME: Main library entry point for the IronLog workout tracker
// ABOUTME: Wires request validation, data sources and services around the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![deny(unsafe_code)]

//! # IronLog
//!
//! Workout logging with derived strength metrics. Users log workouts made of
//! strength sets (weight and reps) and cardio sets (distance and time); IronLog
//! turns them into a dashboard summary, a paginated history list and
//! per-exercise progress series.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: error codes, workout models, filters, pagination
//! - **`ironlog-metrics`**: pure calculations (one-rep-max, volume, dashboard,
//!   history paging, progress)
//! - **this crate**: request validation, the data source seam, the in-memory
//!   store, the service layer, logging and environment configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use ironlog::config::environment::ServerConfig;
//! use ironlog::errors::AppResult;
//! use ironlog::params::DashboardQuery;
//! use ironlog::services::WorkoutService;
//! use ironlog::store::memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let service = WorkoutService::new(InMemoryStore::new(), config.metrics);
//!
//!     let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//!     let dashboard = service
//!         .dashboard("user-1", &DashboardQuery::default(), today)
//!         .await?;
//!     println!("{} workouts", dashboard.summary.total_workouts);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Shared constants (re-exported from `ironlog-core`)
pub mod constants;

/// Unified error handling (re-exported from `ironlog-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Workout, set and exercise models (re-exported from `ironlog-core`)
pub mod models;

/// Sort order and page metadata (re-exported from `ironlog-core`)
pub mod pagination;

/// Query parameter parsing and bounds checks for dashboard and history requests
pub mod params;

/// Service layer combining data sources with the metrics engine
pub mod services;

/// Data source abstraction, in-memory store and exercise catalog
pub mod store;

/// Save-time validation of submitted workouts
pub mod validation;

/// Metrics engine (re-exported crate)
pub use ironlog_metrics as metrics;
