// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment variable handling and level overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ecotrace::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_logging_env() {
    for var in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "SERVICE_NAME",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    // Production always includes source locations
    assert!(config.include_location);
    assert!(!config.include_thread);

    clear_logging_env();
}

#[test]
#[serial]
fn test_logging_config_quiet_by_default() {
    clear_logging_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "ecotrace-cli");
    assert!(!config.include_location);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_with_level_overrides_level_only() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_unknown_log_format_falls_back_to_compact() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "xml");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);
    clear_logging_env();
}
