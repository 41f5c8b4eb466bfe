// ABOUTME: Matching options and scoring configuration for the workout matcher
// ABOUTME: Per-call tolerances with clamping, validated factor weights and tier thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Matching Configuration
//!
//! Two layers of configuration feed the matcher:
//!
//! - [`MatchingOptions`]: the four tolerance knobs a caller supplies per call.
//!   Out-of-range values are clamped rather than rejected.
//! - [`ScoringConfig`]: engine tunables (factor weights, tier thresholds,
//!   conflict demotion floor, ambiguity margin). Validated once when a
//!   [`crate::WorkoutMatcher`] is built.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use workout_core::constants::matching::{
    DATE_WEIGHT, DEFAULT_AMBIGUITY_MARGIN, DEFAULT_CONFLICT_FACTOR_FLOOR,
    DEFAULT_DATE_TOLERANCE_DAYS, DEFAULT_DISTANCE_TOLERANCE, DEFAULT_DURATION_TOLERANCE,
    DEFAULT_MIN_CONFIDENCE, DISTANCE_WEIGHT, DURATION_WEIGHT, EXACT_THRESHOLD,
    MAX_DATE_TOLERANCE_DAYS, PROBABLE_THRESHOLD, TYPE_WEIGHT,
};

/// Allowed deviation of the weight sum from 1.0
const WEIGHT_SUM_EPSILON: f64 = 0.01;

/// Largest ambiguity margin that still separates candidates meaningfully
const MAX_AMBIGUITY_MARGIN: f64 = 0.5;

/// Tolerances supplied by the caller for one match call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingOptions {
    /// Days the activity may be off the planned date (0-7)
    #[serde(alias = "dateTolerance")]
    pub date_tolerance_days: u32,
    /// Relative distance tolerance (0-1)
    #[serde(alias = "distanceTolerance")]
    pub distance_tolerance: f64,
    /// Relative duration tolerance (0-1)
    #[serde(alias = "durationTolerance")]
    pub duration_tolerance: f64,
    /// Minimum confidence for a candidate to be returned (0-1)
    #[serde(alias = "minConfidence")]
    pub min_confidence: f64,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            date_tolerance_days: DEFAULT_DATE_TOLERANCE_DAYS,
            distance_tolerance: DEFAULT_DISTANCE_TOLERANCE,
            duration_tolerance: DEFAULT_DURATION_TOLERANCE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl MatchingOptions {
    /// Build options, clamping each value into its accepted range
    #[must_use]
    pub fn new(
        date_tolerance_days: u32,
        distance_tolerance: f64,
        duration_tolerance: f64,
        min_confidence: f64,
    ) -> Self {
        Self {
            date_tolerance_days,
            distance_tolerance,
            duration_tolerance,
            min_confidence,
        }
        .normalized()
    }

    /// Copy of these options with every value clamped into range
    ///
    /// Non-finite fractions fall back to their defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            date_tolerance_days: self.date_tolerance_days.min(MAX_DATE_TOLERANCE_DAYS),
            distance_tolerance: clamp_fraction(self.distance_tolerance, DEFAULT_DISTANCE_TOLERANCE),
            duration_tolerance: clamp_fraction(self.duration_tolerance, DEFAULT_DURATION_TOLERANCE),
            min_confidence: clamp_fraction(self.min_confidence, DEFAULT_MIN_CONFIDENCE),
        }
    }

    /// Set the date tolerance in days
    #[must_use]
    pub fn with_date_tolerance(self, days: u32) -> Self {
        Self {
            date_tolerance_days: days,
            ..self
        }
        .normalized()
    }

    /// Set the relative distance tolerance
    #[must_use]
    pub fn with_distance_tolerance(self, tolerance: f64) -> Self {
        Self {
            distance_tolerance: tolerance,
            ..self
        }
        .normalized()
    }

    /// Set the relative duration tolerance
    #[must_use]
    pub fn with_duration_tolerance(self, tolerance: f64) -> Self {
        Self {
            duration_tolerance: tolerance,
            ..self
        }
        .normalized()
    }

    /// Set the minimum confidence
    #[must_use]
    pub fn with_min_confidence(self, min_confidence: f64) -> Self {
        Self {
            min_confidence,
            ..self
        }
        .normalized()
    }
}

fn clamp_fraction(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// Relative weight of each scoring factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Date proximity weight
    pub date: f64,
    /// Distance similarity weight
    pub distance: f64,
    /// Duration similarity weight
    pub duration: f64,
    /// Type compatibility weight
    pub workout_type: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            date: DATE_WEIGHT,
            distance: DISTANCE_WEIGHT,
            duration: DURATION_WEIGHT,
            workout_type: TYPE_WEIGHT,
        }
    }
}

impl FactorWeights {
    fn sum(&self) -> f64 {
        self.date + self.distance + self.duration + self.workout_type
    }
}

/// Engine tunables for scoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Factor weights (must sum to 1.0)
    pub weights: FactorWeights,
    /// Confidence at or above which a match is `exact`
    pub exact_threshold: f64,
    /// Confidence at or above which a match is `probable`
    pub probable_threshold: f64,
    /// Content factor score at or below which a match is demoted to `conflict`
    pub conflict_factor_floor: f64,
    /// Confidence gap under which the two best candidates count as tied
    pub ambiguity_margin: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            exact_threshold: EXACT_THRESHOLD,
            probable_threshold: PROBABLE_THRESHOLD,
            conflict_factor_floor: DEFAULT_CONFLICT_FACTOR_FLOOR,
            ambiguity_margin: DEFAULT_AMBIGUITY_MARGIN,
        }
    }
}

impl ScoringConfig {
    /// Validate weights and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a weight is negative, the date weight is
    /// zero, the weights don't sum to 1.0, or a threshold is out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.weights.date,
            self.weights.distance,
            self.weights.duration,
            self.weights.workout_type,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "factor weights must be finite and non-negative",
            ));
        }

        // Date is the only factor always present, so it carries the renormalization
        if self.weights.date <= 0.0 {
            return Err(ConfigError::InvalidWeights("date weight must be positive"));
        }

        if (self.weights.sum() - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights(
                "factor weights should sum to 1.0",
            ));
        }

        if !(self.probable_threshold > 0.0
            && self.probable_threshold < self.exact_threshold
            && self.exact_threshold <= 1.0)
        {
            return Err(ConfigError::InvalidRange(
                "thresholds must satisfy 0 < probable < exact <= 1",
            ));
        }

        if !(0.0..1.0).contains(&self.conflict_factor_floor) {
            return Err(ConfigError::InvalidRange(
                "conflict_factor_floor must be in [0, 1)",
            ));
        }

        if !(0.0..=MAX_AMBIGUITY_MARGIN).contains(&self.ambiguity_margin) {
            return Err(ConfigError::InvalidRange(
                "ambiguity_margin must be in [0, 0.5]",
            ));
        }

        Ok(())
    }
}
