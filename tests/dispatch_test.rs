// ABOUTME: Integration tests for sensor packet dispatch and decode errors
// ABOUTME: Covers unrecognized codes and positional arity validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_core::errors::AppError;
use stride_core::models::SportType;
use stride_tracker::Workout;

#[test]
fn test_unrecognized_code_always_fails() {
    for code in ["XYZ", "run", "SWIM", "", "RUN "] {
        let error = Workout::from_packet(code, &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(error, AppError::invalid_code(code));
        assert_eq!(error.code(), code);
    }
}

#[test]
fn test_missing_arguments_fail_with_counts() {
    let error = Workout::from_packet("SWM", &[720.0, 1.0]).unwrap_err();
    assert_eq!(
        error,
        AppError::InvalidArguments {
            code: "SWM".to_owned(),
            expected: 5,
            actual: 2,
        }
    );
}

#[test]
fn test_extra_arguments_fail_with_counts() {
    let error = Workout::from_packet("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        error,
        AppError::InvalidArguments {
            code: "RUN".to_owned(),
            expected: 3,
            actual: 4,
        }
    );
}

#[test]
fn test_each_code_maps_to_its_sport() {
    let run = Workout::from_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(run.sport_type(), SportType::Running);

    let walk = Workout::from_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(walk.sport_type(), SportType::SportsWalking);

    let swim = Workout::from_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(swim.sport_type(), SportType::Swimming);
}

#[test]
fn test_payload_order_is_positional() {
    let walk = Workout::from_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    match walk {
        Workout::SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        } => {
            assert_eq!(action_count, 9000);
            assert!((duration_hours - 1.0).abs() < f64::EPSILON);
            assert!((weight_kg - 75.0).abs() < f64::EPSILON);
            assert!((height_cm - 180.0).abs() < f64::EPSILON);
        }
        other => panic!("expected SportsWalking, got {other:?}"),
    }

    let swim = Workout::from_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    match swim {
        Workout::Swimming {
            pool_length_m,
            pool_laps,
            ..
        } => {
            assert!((pool_length_m - 25.0).abs() < f64::EPSILON);
            assert!((pool_laps - 40.0).abs() < f64::EPSILON);
        }
        other => panic!("expected Swimming, got {other:?}"),
    }
}
