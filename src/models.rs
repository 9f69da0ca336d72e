// ABOUTME: Re-exports workout, logged set and exercise models from ironlog-core
// ABOUTME: Also exposes the workout filter contract applied by data sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

pub use ironlog_core::filter::WorkoutFilter;
pub use ironlog_core::models::*;
