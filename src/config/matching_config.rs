// ABOUTME: Matching configuration loaded from environment variables with validation
// ABOUTME: Process-wide defaults for tolerances and scoring tunables, lazily initialized
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Matching Configuration Module
//!
//! The matching engine itself reads no environment. Host processes that want
//! deployment-level defaults load them here and pass the resulting
//! [`MatchingOptions`] and [`WorkoutMatcher`] into request handlers.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export WORKOUT_MATCH_DATE_TOLERANCE_DAYS=2
//!    export WORKOUT_MATCH_MIN_CONFIDENCE=0.4
//!    ```
//!
//! 2. Default values (if env vars not set)

use crate::constants::env_vars;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;
use workout_matching::{ConfigError, MatchingOptions, ScoringConfig, WorkoutMatcher};

static MATCHING_ENVIRONMENT: OnceLock<MatchingEnvironment> = OnceLock::new();

/// Matching defaults resolved from the environment
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchingEnvironment {
    /// Default per-call tolerances
    pub options: MatchingOptions,
    /// Scoring tunables
    pub scoring: ScoringConfig,
}

impl MatchingEnvironment {
    /// Get the process-wide configuration, falling back to defaults when the
    /// environment is invalid
    #[must_use]
    pub fn global() -> &'static Self {
        MATCHING_ENVIRONMENT.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!(error = %e, "Invalid matching configuration in environment, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable doesn't parse or the resulting scoring
    /// configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Matcher built from the scoring configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the scoring configuration fails validation
    pub fn matcher(&self) -> Result<WorkoutMatcher, ConfigError> {
        WorkoutMatcher::new(self.scoring)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(days) = parse_env::<u32>(env_vars::DATE_TOLERANCE_DAYS)? {
            self.options = self.options.with_date_tolerance(days);
        }
        if let Some(tolerance) = parse_env::<f64>(env_vars::DISTANCE_TOLERANCE)? {
            self.options = self.options.with_distance_tolerance(tolerance);
        }
        if let Some(tolerance) = parse_env::<f64>(env_vars::DURATION_TOLERANCE)? {
            self.options = self.options.with_duration_tolerance(tolerance);
        }
        if let Some(min_confidence) = parse_env::<f64>(env_vars::MIN_CONFIDENCE)? {
            self.options = self.options.with_min_confidence(min_confidence);
        }
        if let Some(floor) = parse_env::<f64>(env_vars::CONFLICT_FLOOR)? {
            self.scoring.conflict_factor_floor = floor;
        }
        if let Some(margin) = parse_env::<f64>(env_vars::AMBIGUITY_MARGIN)? {
            self.scoring.ambiguity_margin = margin;
        }
        Ok(self)
    }
}

fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {val}"))),
        Err(_) => Ok(None),
    }
}
