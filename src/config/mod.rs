// ABOUTME: Configuration module for environment-driven IronLog settings
// ABOUTME: Exposes ServerConfig plus the metrics defaults it carries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Configuration module for IronLog
//!
//! Configuration is environment-only. [`environment::ServerConfig`] reads
//! `IRONLOG_*` variables and embeds the request defaults defined by
//! [`MetricsConfig`].

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
pub use ironlog_metrics::config::{ConfigError, DashboardConfig, HistoryConfig, MetricsConfig};
