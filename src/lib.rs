// ABOUTME: Main library entry point for the Stride workout tracker
// ABOUTME: Decodes sensor packets into workouts and renders summary reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Tracker
//!
//! A small workout statistics engine: raw sensor packets (an activity code
//! plus a positional payload) are decoded into typed workouts, and each
//! workout yields a one-line summary of distance, mean speed, and calories
//! burned.
//!
//! ## Architecture
//!
//! - **workout**: The closed set of workout variants and their formulas
//! - **formatters**: Derived summary value object and fixed-template rendering
//! - **logging**: Tracing subscriber setup
//! - **stride-core** (workspace crate): errors, constants, and sport models
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_tracker::Workout;
//!
//! # fn example() -> stride_core::AppResult<()> {
//! let workout = Workout::from_packet("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", workout.summary().render());
//! # Ok(())
//! # }
//! ```

/// Summary value object and fixed-template rendering
pub mod formatters;

/// Tracing subscriber configuration
pub mod logging;

/// Workout variants, packet decoding, and metric formulas
pub mod workout;

pub use formatters::WorkoutSummary;
pub use workout::Workout;
