// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates env-driven format selection and CLI logging levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use ironlog::config::{Environment, LogLevel};
use ironlog::constants::env_config;
use ironlog::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::LOG_LEVEL, "debug");
    env::remove_var(env_config::LOG_FORMAT);

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert!(config.include_location);

    env::set_var(env_config::LOG_FORMAT, "compact");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::remove_var(env_config::ENVIRONMENT);
    env::remove_var(env_config::LOG_LEVEL);
    env::remove_var(env_config::LOG_FORMAT);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.service_name, "ironlog");
    assert!(!config.include_location);
}

#[test]
fn test_cli_config_is_compact() {
    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, LogLevel::Warn);
    assert_eq!(quiet.format, LogFormat::Compact);

    assert_eq!(LoggingConfig::for_cli(true).level, LogLevel::Debug);
}
