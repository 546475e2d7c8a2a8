// ABOUTME: Unit conversion constants for distance and time measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Kilometers-per-hour to meters-per-second conversion factor
pub const KMH_TO_MS: f64 = 0.278;

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
