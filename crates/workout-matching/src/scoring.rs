// ABOUTME: Multi-factor confidence scoring for one activity against one planned workout
// ABOUTME: Date, distance, duration, and type factors with tolerance windows and renormalized weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate scoring
//!
//! Each factor is normalized to [0,1] before weighting. Factors without
//! planned data are excluded and the remaining weights renormalized, so a
//! workout with no distance target is not penalized for it.

use serde::{Deserialize, Serialize};
use workout_core::models::{Activity, PlannedWorkout};

use crate::compatibility::type_compatibility;
use crate::config::{FactorWeights, MatchingOptions};

/// Per-factor scores for one candidate; `None` marks an excluded factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Date proximity (always present)
    pub date: f64,
    /// Distance similarity
    pub distance: Option<f64>,
    /// Duration similarity
    pub duration: Option<f64>,
    /// Type compatibility
    pub workout_type: Option<f64>,
}

impl FactorScores {
    /// Weighted mean over present factors, clamped to [0,1]
    #[must_use]
    pub fn weighted_confidence(&self, weights: &FactorWeights) -> f64 {
        let present = [
            Some((self.date, weights.date)),
            self.distance.map(|score| (score, weights.distance)),
            self.duration.map(|score| (score, weights.duration)),
            self.workout_type.map(|score| (score, weights.workout_type)),
        ];

        let (weighted, total_weight) = present
            .iter()
            .flatten()
            .fold((0.0, 0.0), |(sum, total), (score, weight)| {
                (score.mul_add(*weight, sum), total + weight)
            });

        if total_weight <= 0.0 {
            return 0.0;
        }
        (weighted / total_weight).clamp(0.0, 1.0)
    }

    /// Lowest score among the content factors (distance, duration, type)
    #[must_use]
    pub fn weakest_content_factor(&self) -> Option<f64> {
        [self.distance, self.duration, self.workout_type]
            .into_iter()
            .flatten()
            .reduce(f64::min)
    }
}

/// Raw measurements behind a candidate's factor scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Factor scores
    pub factors: FactorScores,
    /// Final confidence
    pub confidence: f64,
    /// Activity date minus planned date, in days
    pub day_difference: i64,
    /// Relative distance error, when a distance was planned
    pub distance_error: Option<f64>,
    /// Absolute distance difference in miles, when a distance was planned
    pub distance_gap_miles: Option<f64>,
    /// Relative duration error, when a duration was planned
    pub duration_error: Option<f64>,
}

/// Factor score from an error measured against its tolerance
///
/// 1.0 for no error, linear down to 0.0 at the tolerance, 0.0 beyond it. A
/// zero tolerance only credits an exact hit.
#[must_use]
pub fn tolerance_factor(error: f64, tolerance: f64) -> f64 {
    if error <= 0.0 {
        return 1.0;
    }
    if tolerance <= 0.0 || error >= tolerance {
        return 0.0;
    }
    1.0 - error / tolerance
}

/// `|actual - planned| / planned`; callers guarantee `planned > 0`
#[must_use]
pub fn relative_error(actual: f64, planned: f64) -> f64 {
    (actual - planned).abs() / planned
}

/// Score one activity against one workout
///
/// Returns `None` when the date difference falls outside the date
/// tolerance window; such candidates are never matches.
#[must_use]
pub fn score_candidate(
    activity: &Activity,
    workout: &PlannedWorkout,
    options: &MatchingOptions,
    weights: &FactorWeights,
) -> Option<CandidateScore> {
    let day_difference = (activity.calendar_date() - workout.date).num_days();
    let abs_days = day_difference.unsigned_abs();
    if abs_days > u64::from(options.date_tolerance_days) {
        return None;
    }
    // Safe: bounded by the date tolerance above
    #[allow(clippy::cast_precision_loss)]
    let date = tolerance_factor(abs_days as f64, f64::from(options.date_tolerance_days));

    let actual_miles = activity.distance_miles();
    let distance_error = workout
        .usable_distance_miles()
        .map(|planned| relative_error(actual_miles, planned));
    let distance_gap_miles = workout
        .usable_distance_miles()
        .map(|planned| (actual_miles - planned).abs());

    let duration_error = workout
        .usable_duration_minutes()
        .map(|planned| relative_error(activity.moving_time_minutes(), planned));

    let factors = FactorScores {
        date,
        distance: distance_error.map(|err| tolerance_factor(err, options.distance_tolerance)),
        duration: duration_error.map(|err| tolerance_factor(err, options.duration_tolerance)),
        workout_type: type_compatibility(activity, workout),
    };

    Some(CandidateScore {
        confidence: factors.weighted_confidence(weights),
        factors,
        day_difference,
        distance_error,
        distance_gap_miles,
        duration_error,
    })
}
