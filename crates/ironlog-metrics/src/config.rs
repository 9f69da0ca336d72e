// ABOUTME: Tunable defaults for dashboard and history requests with range validation
// ABOUTME: Defines MetricsConfig and the ConfigError variants raised when defaults break hard bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Metrics Configuration
//!
//! Defaults applied when a request omits a parameter. Hard bounds come from
//! `ironlog_core::constants` and a configured default must sit inside them.

use ironlog_core::constants::{dashboard, history};
use ironlog_core::errors::{AppError, ErrorCode};
use ironlog_core::pagination::SortOrder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

/// Dashboard request defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Window used when `months` is omitted
    pub default_months: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { default_months: 3 }
    }
}

/// History request defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Page size used when `limit` is omitted
    pub default_limit: usize,
    /// Order used when `order` is omitted
    pub default_order: SortOrder,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            default_order: SortOrder::Desc,
        }
    }
}

/// Metrics Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Dashboard defaults
    pub dashboard: DashboardConfig,
    /// History defaults
    pub history: HistoryConfig,
}

impl MetricsConfig {
    /// Check every default against the hard request bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(dashboard::MIN_MONTHS..=dashboard::MAX_MONTHS).contains(&self.dashboard.default_months)
        {
            return Err(ConfigError::ValueOutOfRange(
                "dashboard.default_months must be between 1 and 12",
            ));
        }
        if !(history::MIN_PAGE_LIMIT..=history::MAX_PAGE_LIMIT)
            .contains(&self.history.default_limit)
        {
            return Err(ConfigError::ValueOutOfRange(
                "history.default_limit must be between 1 and 100",
            ));
        }
        Ok(())
    }
}
