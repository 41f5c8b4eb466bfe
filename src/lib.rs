// ABOUTME: Main library entry point for the workout sync matching service
// ABOUTME: Wires environment configuration, logging, and provider payloads to the matching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Sync
//!
//! Links tracker activities to the planned workouts of a training plan.
//!
//! ## Architecture
//!
//! - **`workout_core`**: domain models, error types, and unit constants
//! - **`workout_matching`**: the pure matching engine (matcher, batch
//!   matcher, summarizer)
//! - **this crate**: environment configuration, logging setup, and
//!   provider payload mapping
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_sync::config::MatchingEnvironment;
//! use workout_sync::providers::parse_activities;
//! use workout_sync::{generate_matching_summary, PlannedWorkout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let environment = MatchingEnvironment::global();
//! let matcher = environment.matcher()?;
//!
//! let activities = parse_activities(r#"[{"id": 1, "type": "Run", "start_date": "2024-06-01T07:00:00Z"}]"#)?;
//! let workouts: Vec<PlannedWorkout> = Vec::new();
//!
//! let results = matcher.match_batch(&activities, &workouts, &environment.options)?;
//! let summary = generate_matching_summary(&activities, &workouts, &results);
//! println!("{}", serde_json::to_string_pretty(&summary)?);
//! # Ok(())
//! # }
//! ```

/// Environment-driven matching configuration
pub mod config;

/// Service names and environment variable names
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Provider payload mapping
pub mod providers;

pub use workout_core::errors::{AppError, AppResult, ErrorCode};
pub use workout_core::models::{
    Activity, ActivityBuilder, PlannedWorkout, SportType, Terrain, WorkoutStatus, WorkoutType,
};
pub use workout_matching::{
    batch_match_activities, generate_matching_summary, match_activity_to_workouts,
    BatchMatchResult, ConfigError, ConflictReason, Discrepancy, DiscrepancyField, FactorScores,
    FactorWeights, MatchType, MatchingOptions, MatchingSummary, ScoringConfig, Severity,
    SummaryTotals, TierCounts, WorkoutMatch, WorkoutMatcher,
};
