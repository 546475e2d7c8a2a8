// ABOUTME: Core types and constants for the Stride workout tracker
// ABOUTME: Foundation crate with error handling, constants, and sport models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride
//! workout tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **constants**: Unit conversions and physiological coefficients
//! - **models**: Sport type enumeration with code parsing and display names

/// Unified error handling for sensor packet decoding
pub mod errors;

/// Unit conversion and physiological constants organized by domain
pub mod constants;

/// Core data models (`SportType`)
pub mod models;

pub use errors::{AppError, AppResult};
pub use models::SportType;
