// ABOUTME: Logging configuration and structured logging setup for the tracker
// ABOUTME: Configures tracing subscriber with env-filtered levels and compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Structured logging configuration
//!
//! The tracker has no configuration surface of its own, so the only knob is
//! the standard `RUST_LOG` filter with an `info` default.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level when no env filter is set (trace, debug, info, warn, error)
    pub default_level: String,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: "info".into(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Initialize the global tracing subscriber from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level.clone()));

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location),
            )
            .try_init()?;
        Ok(())
    }
}

/// Initialize logging with the default configuration and `RUST_LOG` overrides
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::default().init()
}
