// ABOUTME: Core types and constants for the workout matching engine
// ABOUTME: Foundation crate with error handling, activity and workout models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for activity-to-workout
//! matching. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and matching defaults
//! - **models**: Tracker activities, sport types, and planned workouts

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Activity, SportType, PlannedWorkout)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
