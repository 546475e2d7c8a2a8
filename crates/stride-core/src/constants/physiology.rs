// ABOUTME: Physiological coefficients for per-activity calorie estimation
// ABOUTME: Step and stroke geometry plus the fixed calorie formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

/// Distance covered by one step when running or walking (meters)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one swim stroke (meters)
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Running calories: mean-speed multiplier
pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;

/// Running calories: mean-speed shift term
pub const RUNNING_SPEED_SHIFT: f64 = 1.79;

/// Walking calories: athlete weight multiplier
pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Walking calories: speed-squared over height multiplier
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Swimming calories: mean-speed shift term
pub const SWIMMING_SPEED_SHIFT: f64 = 1.1;

/// Swimming calories: weight multiplier
pub const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;
