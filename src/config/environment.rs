// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads IRONLOG_* variables into typed settings and validates request defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Environment-based configuration

use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use ironlog_metrics::config::{ConfigError, MetricsConfig};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};

use crate::constants::env_config;
use crate::errors::AppResult;
use crate::pagination::SortOrder;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default level
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// Lowercase name accepted by `EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Lowercase name used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Request defaults for dashboard and history
    pub metrics: MetricsConfig,
    /// Snapshot file the in-memory store loads from, if any
    pub data_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error when a numeric or order variable does
    /// not parse, or when the resulting defaults fail [`Self::validate`].
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let mut metrics = MetricsConfig::default();
        if let Some(raw) = env_var(env_config::DEFAULT_MONTHS) {
            metrics.dashboard.default_months = parse_var(env_config::DEFAULT_MONTHS, &raw)?;
        }
        if let Some(raw) = env_var(env_config::DEFAULT_PAGE_SIZE) {
            metrics.history.default_limit = parse_var(env_config::DEFAULT_PAGE_SIZE, &raw)?;
        }
        if let Some(raw) = env_var(env_config::DEFAULT_ORDER) {
            metrics.history.default_order = SortOrder::from_str(&raw).map_err(|_| {
                ConfigError::Parse(format!(
                    "Invalid {} value '{raw}'. Valid options: asc, desc",
                    env_config::DEFAULT_ORDER
                ))
            })?;
        }

        let config = Self {
            environment: env_var(env_config::ENVIRONMENT)
                .map(|raw| Environment::from_str_or_default(&raw))
                .unwrap_or_default(),
            log_level: env_var(env_config::LOG_LEVEL)
                .map(|raw| LogLevel::from_str_or_default(&raw))
                .unwrap_or_default(),
            metrics,
            data_file: env_var(env_config::DATA_FILE).map(PathBuf::from),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a request default lies outside its
    /// hard bound.
    pub fn validate(&self) -> AppResult<()> {
        self.metrics.validate()?;
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "IronLog Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Dashboard Months: {}\n\
             - History Page Size: {}\n\
             - History Order: {}\n\
             - Data File: {}",
            self.environment,
            self.log_level,
            self.metrics.dashboard.default_months,
            self.metrics.history.default_limit,
            self.metrics.history.default_order,
            self.data_file
                .as_ref()
                .map_or_else(|| "none".to_owned(), |path| path.display().to_string()),
        )
    }
}

/// Non-blank environment variable value
fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::Parse(format!("Invalid {key} value '{raw}'")))
}
