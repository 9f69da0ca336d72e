// ABOUTME: Hard limits and shared constants for workouts, dashboards and history paging
// ABOUTME: Bounds enforced at the request boundary and assumed by the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Constants module
//!
//! Values here are part of the API contract and are deliberately not
//! configurable. Tunable defaults live in `ironlog_metrics::config`.

/// Dashboard window bounds
pub mod dashboard {
    /// Smallest accepted dashboard window, in calendar months
    pub const MIN_MONTHS: u32 = 1;
    /// Largest accepted dashboard window, in calendar months
    pub const MAX_MONTHS: u32 = 12;
    /// Number of workouts listed under `recent_workouts`
    pub const RECENT_WORKOUTS_LIMIT: usize = 5;
}

/// History list paging bounds
pub mod history {
    /// Smallest accepted page size
    pub const MIN_PAGE_LIMIT: usize = 1;
    /// Largest accepted page size
    pub const MAX_PAGE_LIMIT: usize = 100;
}

/// Workout content limits
pub mod workout {
    /// Maximum length of workout notes, in characters
    pub const MAX_NOTES_LENGTH: usize = 1000;
    /// Maximum length of an exercise name, in characters
    pub const MAX_EXERCISE_NAME_LENGTH: usize = 100;
}

/// One-rep-max estimation constants (Brzycki)
pub mod one_rep_max {
    /// Brzycki intercept
    pub const BRZYCKI_INTERCEPT: f64 = 1.0278;
    /// Brzycki per-rep slope
    pub const BRZYCKI_SLOPE: f64 = 0.0278;
    /// Rep count past which the Brzycki denominator turns negative
    pub const BRZYCKI_RELIABLE_MAX_REPS: i32 = 36;
}

/// Wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service names used in structured logging
pub mod service_names {
    /// Main service name
    pub const IRONLOG: &str = "ironlog";
}
