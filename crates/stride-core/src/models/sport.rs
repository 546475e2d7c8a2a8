// ABOUTME: Sport type enumeration for tracked workout activities
// ABOUTME: Defines the supported sports with code parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Enumeration of supported sport/activity types
///
/// This is a closed set: the sensor protocol only emits the three codes below,
/// so there is no catch-all variant. Unknown codes are a decode error, never a
/// silently absent workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running activity
    Running,
    /// Sports (race) walking activity
    SportsWalking,
    /// Pool swimming activity
    Swimming,
}

impl SportType {
    /// Parse a `SportType` from a sensor packet activity code
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidCode` when the code is not one of
    /// `"SWM"`, `"RUN"`, `"WLK"`.
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(AppError::invalid_code(other)),
        }
    }

    /// Get the sensor packet code for this sport type
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Get the human-readable name used in workout summaries
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional sensor values this sport's constructor takes
    ///
    /// Running carries (action, duration, weight); walking adds height;
    /// swimming adds pool length and lap count.
    #[must_use]
    pub const fn sensor_field_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
