// ABOUTME: Activity-to-planned-workout matching engine
// ABOUTME: Multi-factor scoring, batch matching, and batch summaries as pure functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Matching
//!
//! Decides which planned workout a tracker activity corresponds to.
//!
//! - **Matcher**: scores one activity against every candidate workout
//!   (date proximity, distance, duration, type compatibility), drops
//!   candidates below the minimum confidence, and ranks the rest.
//! - **Batch Matcher**: runs the matcher for many activities against a
//!   shared candidate list.
//! - **Summarizer**: reduces a batch result to tier counts and suggestions.
//!
//! Everything here is pure: no I/O, no hidden state, no randomness.
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use workout_core::models::{ActivityBuilder, PlannedWorkout, SportType};
//! use workout_matching::{match_activity_to_workouts, MatchType, MatchingOptions};
//!
//! let activity = ActivityBuilder::new(
//!     "a-1",
//!     "Saturday long run",
//!     SportType::Run,
//!     Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap(),
//! )
//! .distance_meters(16_090.0)
//! .moving_time_seconds(3600)
//! .build();
//!
//! let workout = PlannedWorkout::new("w-1", "plan-1", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
//!     .with_distance_miles(10.0)
//!     .with_duration_minutes(60.0);
//!
//! let matches = match_activity_to_workouts(&activity, &[workout], &MatchingOptions::default()).unwrap();
//! assert_eq!(matches[0].match_type, MatchType::Exact);
//! ```

/// Tolerances, weights, and thresholds
pub mod config;

/// Sport and workout type compatibility table
pub mod compatibility;

/// Per-candidate factor scoring
pub mod scoring;

/// Discrepancy detection
pub mod discrepancy;

/// Single-activity matcher
pub mod matcher;

/// Batch matcher
pub mod batch;

/// Batch summaries
pub mod summary;

pub use batch::{batch_match_activities, BatchMatchResult};
pub use config::{ConfigError, FactorWeights, MatchingOptions, ScoringConfig};
pub use discrepancy::{Discrepancy, DiscrepancyField, Severity};
pub use matcher::{match_activity_to_workouts, ConflictReason, MatchType, WorkoutMatch, WorkoutMatcher};
pub use scoring::FactorScores;
pub use summary::{generate_matching_summary, MatchingSummary, SummaryTotals, TierCounts};
