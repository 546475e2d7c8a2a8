// ABOUTME: Derived workout summary value object and its fixed-template rendering
// ABOUTME: Formats computed metrics with three-decimal fixed-point precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Summary formatting
//!
//! `WorkoutSummary` carries only computed values; it is never mutated after
//! creation. The rendered line uses a fixed template with three-decimal
//! fixed-point formatting on every numeric field regardless of magnitude.

use serde::{Deserialize, Serialize};

/// Derived, human-readable summary of a workout's computed metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Display name of the activity ("Running", "SportsWalking", "Swimming")
    pub activity_name: String,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Distance covered in km
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Estimated calories burned
    pub calories_burned: f64,
}

impl WorkoutSummary {
    /// Render the summary as the fixed one-line report
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.activity_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_burned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_fixed_template() {
        let summary = WorkoutSummary {
            activity_name: "Running".to_owned(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_burned: 797.805,
        };
        assert_eq!(
            summary.render(),
            "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories: 797.805."
        );
    }

    #[test]
    fn test_render_keeps_three_decimals_for_large_values() {
        let summary = WorkoutSummary {
            activity_name: "Swimming".to_owned(),
            duration_hours: 12.0,
            distance_km: 1234.5,
            mean_speed_kmh: 102.875,
            calories_burned: 99_999.12,
        };
        let line = summary.render();
        assert!(line.contains("Duration: 12.000 h"));
        assert!(line.contains("Distance: 1234.500 km"));
        assert!(line.contains("Mean speed: 102.875 km/h"));
        assert!(line.contains("Calories: 99999.120."));
    }
}
