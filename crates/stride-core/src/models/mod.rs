// ABOUTME: Core data models for the Stride workout tracker
// ABOUTME: Re-exports SportType and related model structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Data Models
//!
//! Core data structures shared across the workspace. The sensor protocol is
//! tiny: a short activity code selects which formulas apply to the positional
//! payload that follows it.

mod sport;

pub use sport::SportType;
