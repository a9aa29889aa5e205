// ABOUTME: Unified error type for the EcoTrace application layer
// ABOUTME: Wraps validation, configuration, I/O, and serialization failures with stable codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

//! # Unified Error Handling
//!
//! The engine itself cannot fail; every error here comes from the edges:
//! parsing caller input, loading configuration, reading files, or writing
//! output.

use std::io;

use ecotrace_core::ValidationError;
use ecotrace_intelligence::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    /// Input record or field update rejected
    InvalidInput = 3000,
    #[serde(rename = "INVALID_FORMAT")]
    /// Input could not be parsed
    InvalidFormat = 3002,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    /// Configuration override unparsable or inconsistent
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    /// Unexpected internal failure
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    /// File could not be read or written
    StorageError = 9002,
}

impl ErrorCode {
    /// Process exit status for this error class
    #[must_use]
    pub const fn exit_status(self) -> u8 {
        match self {
            Self::InvalidInput | Self::InvalidFormat => 2,
            Self::ConfigInvalid => 3,
            Self::StorageError => 4,
            Self::InternalError => 1,
        }
    }
}

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Input record or field update rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Engine configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// JSON input could not be parsed, or output could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging subsystem failed to start
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Create an I/O error for a path
    #[must_use]
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::InvalidInput,
            Self::Json(_) => ErrorCode::InvalidFormat,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Io { .. } => ErrorCode::StorageError,
            Self::Logging(_) => ErrorCode::InternalError,
        }
    }
}

/// Result alias for application operations
pub type AppResult<T> = Result<T, AppError>;
