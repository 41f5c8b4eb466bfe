// ABOUTME: Service-level constants for the workout sync facade crate
// ABOUTME: Service names and environment variable names for matching configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Service names and the environment variables read by [`crate::config`].
//! Matching defaults live in `workout_core::constants::matching`.

/// Service names used in structured logs
pub mod service_names {
    /// This service
    pub const WORKOUT_SYNC: &str = "workout-sync";
}

/// Environment variables overriding matching configuration
pub mod env_vars {
    /// Date tolerance in days (integer, 0-7)
    pub const DATE_TOLERANCE_DAYS: &str = "WORKOUT_MATCH_DATE_TOLERANCE_DAYS";
    /// Relative distance tolerance (0-1)
    pub const DISTANCE_TOLERANCE: &str = "WORKOUT_MATCH_DISTANCE_TOLERANCE";
    /// Relative duration tolerance (0-1)
    pub const DURATION_TOLERANCE: &str = "WORKOUT_MATCH_DURATION_TOLERANCE";
    /// Minimum confidence (0-1)
    pub const MIN_CONFIDENCE: &str = "WORKOUT_MATCH_MIN_CONFIDENCE";
    /// Conflict demotion floor for content factors
    pub const CONFLICT_FLOOR: &str = "WORKOUT_MATCH_CONFLICT_FLOOR";
    /// Ambiguity margin between the two best candidates
    pub const AMBIGUITY_MARGIN: &str = "WORKOUT_MATCH_AMBIGUITY_MARGIN";
}
