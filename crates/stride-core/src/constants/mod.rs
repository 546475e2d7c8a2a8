// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Constants module
//!
//! Application constants grouped by domain rather than a single large file.
//! All calorie coefficients come from the reference formulas the tracker
//! implements and must not be tuned independently of them.

/// Calorie-formula coefficients and sensor geometry per activity
pub mod physiology;
/// Unit conversion and measurement constants
pub mod units;
