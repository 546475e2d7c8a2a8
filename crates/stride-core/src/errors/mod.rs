// ABOUTME: Unified error types for sensor packet decoding and dispatch
// ABOUTME: Provides AppError with structured variants and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Unified Error Handling
//!
//! Structured error types for workout packet processing:
//! - `AppError` - errors raised while decoding a (code, data) sensor packet
//! - `AppResult` - result alias used throughout the workspace
//!
//! Every variant carries enough context to report the failure without access
//! to the original packet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while decoding a sensor packet into a workout.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum AppError {
    /// The activity code is not one of the recognized values
    #[error("unrecognized workout code '{code}' (expected one of SWM, RUN, WLK)")]
    InvalidCode {
        /// The unrecognized activity code as received
        code: String,
    },
    /// The sensor payload does not match the positional arity of the target type
    #[error("workout code '{code}' expects {expected} sensor values, got {actual}")]
    InvalidArguments {
        /// The recognized activity code
        code: String,
        /// Number of values the activity's constructor takes
        expected: usize,
        /// Number of values actually supplied
        actual: usize,
    },
}

impl AppError {
    /// Create an "invalid code" error
    #[must_use]
    pub fn invalid_code(code: impl Into<String>) -> Self {
        Self::InvalidCode { code: code.into() }
    }

    /// Create an "invalid arguments" error
    #[must_use]
    pub fn invalid_arguments(code: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidArguments {
            code: code.into(),
            expected,
            actual,
        }
    }

    /// Get the activity code associated with this error
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidCode { code } | Self::InvalidArguments { code, .. } => code,
        }
    }
}

/// Result type alias using `AppError`
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_display_names_the_code() {
        let error = AppError::invalid_code("XYZ");
        assert!(error.to_string().contains("XYZ"));
        assert_eq!(error.code(), "XYZ");
    }

    #[test]
    fn test_invalid_arguments_display_names_counts() {
        let error = AppError::invalid_arguments("RUN", 3, 5);
        let message = error.to_string();
        assert!(message.contains("RUN"));
        assert!(message.contains('3'));
        assert!(message.contains('5'));
    }

    #[test]
    fn test_error_serialization_round_trip() {
        let error = AppError::invalid_arguments("SWM", 5, 2);
        let json = serde_json::to_string(&error).unwrap();
        let restored: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, restored);
    }
}
