// ABOUTME: Re-exports hard limits and shared constants from ironlog-core
// ABOUTME: Adds the environment variable names read by the configuration layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

pub use ironlog_core::constants::*;

/// Environment variable names
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "IRONLOG_ENVIRONMENT";
    /// Application log level
    pub const LOG_LEVEL: &str = "IRONLOG_LOG_LEVEL";
    /// Dashboard window used when a request omits `months`
    pub const DEFAULT_MONTHS: &str = "IRONLOG_DEFAULT_MONTHS";
    /// History page size used when a request omits `limit`
    pub const DEFAULT_PAGE_SIZE: &str = "IRONLOG_DEFAULT_PAGE_SIZE";
    /// History order used when a request omits `order`
    pub const DEFAULT_ORDER: &str = "IRONLOG_DEFAULT_ORDER";
    /// JSON snapshot the in-memory store loads on startup
    pub const DATA_FILE: &str = "IRONLOG_DATA_FILE";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
