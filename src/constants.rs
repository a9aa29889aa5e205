// ABOUTME: Application-level constants for the EcoTrace CLI and logging
// ABOUTME: Service names and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! Application constants

/// Service identifiers used in structured logs
pub mod service_names {
    /// CLI service name
    pub const ECOTRACE_CLI: &str = "ecotrace-cli";
}

/// Environment variable names read by the application layer
pub mod env_config {
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Service name override
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Include file/line in log events
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids/names in log events
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
}
