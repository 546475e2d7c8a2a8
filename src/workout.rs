// ABOUTME: Workout variants with per-activity distance, speed, and calorie formulas
// ABOUTME: Decodes (code, data) sensor packets into a closed set of tagged workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Workout decoding and metric computation
//!
//! A workout is one of three tagged variants, each holding the raw sensor
//! inputs for its activity. Each operation is a single `match` over the
//! variant set; there is no trait object or virtual dispatch for a fixed
//! set this small.

use serde::{Deserialize, Serialize};
use tracing::debug;

use stride_core::constants::physiology::{
    RUNNING_SPEED_MULTIPLIER, RUNNING_SPEED_SHIFT, STEP_LENGTH_M, STROKE_LENGTH_M,
    SWIMMING_SPEED_SHIFT, SWIMMING_WEIGHT_MULTIPLIER, WALKING_SPEED_HEIGHT_MULTIPLIER,
    WALKING_WEIGHT_MULTIPLIER,
};
use stride_core::constants::units::{CM_PER_M, KMH_TO_MS, METERS_PER_KM, MINUTES_PER_HOUR};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::SportType;

use crate::formatters::WorkoutSummary;

/// A single recorded exercise session with raw sensor inputs
///
/// Immutable once constructed. `duration_hours` must be positive: the speed
/// formulas divide by it unchecked, so a zero duration is a caller error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "sport", rename_all = "snake_case")]
pub enum Workout {
    /// Running session recorded as a step count
    Running {
        /// Number of steps taken
        action_count: u32,
        /// Session duration in hours (must be positive)
        duration_hours: f64,
        /// Athlete weight in kg
        weight_kg: f64,
    },
    /// Sports walking session recorded as a step count
    SportsWalking {
        /// Number of steps taken
        action_count: u32,
        /// Session duration in hours (must be positive)
        duration_hours: f64,
        /// Athlete weight in kg
        weight_kg: f64,
        /// Athlete height in cm
        height_cm: f64,
    },
    /// Pool swimming session recorded as a stroke count
    Swimming {
        /// Number of strokes taken
        action_count: u32,
        /// Session duration in hours (must be positive)
        duration_hours: f64,
        /// Athlete weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_laps: f64,
    },
}

impl Workout {
    /// Decode a sensor packet into a workout
    ///
    /// `data` is positional and must match the target activity's constructor
    /// exactly: `RUN` takes (action, duration, weight), `WLK` adds height,
    /// `SWM` adds pool length and lap count. Duration is in hours and is
    /// assumed positive; it is not range-checked here.
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidCode` when `code` is not `SWM`, `RUN`, or `WLK`
    /// - `AppError::InvalidArguments` when `data.len()` does not match the
    ///   activity's positional arity
    pub fn from_packet(code: &str, data: &[f64]) -> AppResult<Self> {
        let sport = SportType::from_code(code)?;
        let expected = sport.sensor_field_count();
        if data.len() != expected {
            return Err(AppError::invalid_arguments(code, expected, data.len()));
        }

        debug!(code, values = data.len(), "decoding sensor packet");

        let action_count = data[0] as u32;
        let duration_hours = data[1];
        let weight_kg = data[2];

        let workout = match sport {
            SportType::Running => Self::Running {
                action_count,
                duration_hours,
                weight_kg,
            },
            SportType::SportsWalking => Self::SportsWalking {
                action_count,
                duration_hours,
                weight_kg,
                height_cm: data[3],
            },
            SportType::Swimming => Self::Swimming {
                action_count,
                duration_hours,
                weight_kg,
                pool_length_m: data[3],
                pool_laps: data[4],
            },
        };
        Ok(workout)
    }

    /// Get the sport type of this workout
    #[must_use]
    pub const fn sport_type(&self) -> SportType {
        match self {
            Self::Running { .. } => SportType::Running,
            Self::SportsWalking { .. } => SportType::SportsWalking,
            Self::Swimming { .. } => SportType::Swimming,
        }
    }

    /// Get the session duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::SportsWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Get the athlete weight in kg
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running { weight_kg, .. }
            | Self::SportsWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => *weight_kg,
        }
    }

    /// Get the raw action count (steps or strokes)
    #[must_use]
    pub const fn action_count(&self) -> u32 {
        match self {
            Self::Running { action_count, .. }
            | Self::SportsWalking { action_count, .. }
            | Self::Swimming { action_count, .. } => *action_count,
        }
    }

    /// Compute the distance covered in km
    ///
    /// Step-based activities use the step length; swimming uses the stroke
    /// length instead.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let stride_m = match self {
            Self::Running { .. } | Self::SportsWalking { .. } => STEP_LENGTH_M,
            Self::Swimming { .. } => STROKE_LENGTH_M,
        };
        f64::from(self.action_count()) * stride_m / METERS_PER_KM
    }

    /// Compute the mean speed in km/h
    ///
    /// Swimming derives speed from pool geometry rather than stroke count;
    /// the other activities divide distance by duration.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                duration_hours,
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * pool_laps / METERS_PER_KM / duration_hours,
            Self::Running { .. } | Self::SportsWalking { .. } => {
                self.distance_km() / self.duration_hours()
            }
        }
    }

    /// Compute the calories burned over the session
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running {
                duration_hours,
                weight_kg,
                ..
            } => {
                RUNNING_SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), RUNNING_SPEED_SHIFT)
                    * weight_kg
                    / METERS_PER_KM
                    * duration_hours
                    * MINUTES_PER_HOUR
            }
            Self::SportsWalking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
                let height_m = height_cm / CM_PER_M;
                WALKING_WEIGHT_MULTIPLIER.mul_add(
                    *weight_kg,
                    speed_ms.powi(2) / height_m * WALKING_SPEED_HEIGHT_MULTIPLIER * weight_kg,
                ) * duration_hours
                    * MINUTES_PER_HOUR
            }
            Self::Swimming {
                duration_hours,
                weight_kg,
                ..
            } => {
                (self.mean_speed_kmh() + SWIMMING_SPEED_SHIFT)
                    * SWIMMING_WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_hours
            }
        }
    }

    /// Produce the derived summary for this workout
    ///
    /// Pure function of the workout's fields: calling it twice yields
    /// identical summaries.
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        let summary = WorkoutSummary {
            activity_name: self.sport_type().display_name().to_owned(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_burned: self.spent_calories(),
        };
        debug!(
            sport = %self.sport_type(),
            distance_km = summary.distance_km,
            calories = summary.calories_burned,
            "computed workout summary"
        );
        summary
    }
}
