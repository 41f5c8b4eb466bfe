// ABOUTME: Matches one tracker activity against candidate planned workouts
// ABOUTME: Ranks candidates by confidence, classifies match type, attaches discrepancies and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{Activity, PlannedWorkout};

use crate::config::{ConfigError, MatchingOptions, ScoringConfig};
use crate::discrepancy::{detect_discrepancies, Discrepancy, DiscrepancyField};
use crate::scoring::{score_candidate, CandidateScore, FactorScores};

/// Confidence tier of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Activity almost certainly completes the workout
    Exact,
    /// Activity likely completes the workout
    Probable,
    /// Activity may complete the workout
    Possible,
    /// Confidence clears the threshold but the details disagree or tie
    Conflict,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Probable => "probable",
            Self::Possible => "possible",
            Self::Conflict => "conflict",
        })
    }
}

/// Why a match was demoted to `conflict`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "field")]
pub enum ConflictReason {
    /// A content factor scored at or near zero
    FactorMismatch(DiscrepancyField),
    /// Another candidate scored within the ambiguity margin
    AmbiguousCandidates,
}

/// One ranked candidate for an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMatch {
    /// Matched activity
    pub activity_id: String,
    /// Candidate planned workout
    pub workout_id: String,
    /// Confidence in [0,1]
    pub confidence: f64,
    /// Confidence tier
    pub match_type: MatchType,
    /// Per-factor breakdown
    pub factors: FactorScores,
    /// Activity date minus planned date, in days
    pub day_difference: i64,
    /// Fields diverging from the plan
    pub discrepancies: Vec<Discrepancy>,
    /// Plain-language advice for the coach or athlete
    pub suggestions: Vec<String>,
    /// Set when `match_type` is `conflict`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_reason: Option<ConflictReason>,
}

/// Activity-to-workout matcher with a validated scoring configuration
///
/// Stateless apart from its configuration: identical inputs always produce
/// identical output, and one instance can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkoutMatcher {
    config: ScoringConfig,
}

struct RankedCandidate<'a> {
    workout: &'a PlannedWorkout,
    score: CandidateScore,
}

impl WorkoutMatcher {
    /// Create a matcher with a custom scoring configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scoring configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank candidate workouts for one activity
    ///
    /// Candidates outside the date window or below `min_confidence` are
    /// dropped. The result is sorted by confidence, then by smaller date
    /// difference, then by smaller distance difference, then by workout id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed activity data and
    /// `InternalError` if a computed confidence is not finite.
    pub fn match_activity(
        &self,
        activity: &Activity,
        workouts: &[PlannedWorkout],
        options: &MatchingOptions,
    ) -> AppResult<Vec<WorkoutMatch>> {
        activity.validate()?;
        let options = options.normalized();

        let mut ranked = Vec::new();
        for workout in workouts {
            let Some(score) = score_candidate(activity, workout, &options, &self.config.weights)
            else {
                continue;
            };
            if !score.confidence.is_finite() {
                return Err(AppError::internal(format!(
                    "non-finite confidence scoring workout {}",
                    workout.id
                ))
                .with_resource_id(activity.id()));
            }
            if score.confidence >= options.min_confidence {
                ranked.push(RankedCandidate { workout, score });
            }
        }
        ranked.sort_by(rank_candidates);

        let tied = self.tied_leaders(&ranked);
        let matches: Vec<WorkoutMatch> = ranked
            .iter()
            .enumerate()
            .map(|(index, candidate)| self.build_match(activity, candidate, &options, index < tied))
            .collect();

        debug!(
            activity_id = activity.id(),
            candidates = workouts.len(),
            matched = matches.len(),
            top_confidence = matches.first().map(|m| m.confidence),
            "Matched activity against planned workouts"
        );

        Ok(matches)
    }

    /// Number of leading candidates that tie within the ambiguity margin
    ///
    /// Zero when the best candidate stands alone.
    fn tied_leaders(&self, ranked: &[RankedCandidate<'_>]) -> usize {
        let Some(best) = ranked.first() else {
            return 0;
        };
        let within_margin = ranked
            .iter()
            .take_while(|candidate| {
                best.score.confidence - candidate.score.confidence <= self.config.ambiguity_margin
            })
            .count();
        if within_margin > 1 {
            within_margin
        } else {
            0
        }
    }

    fn build_match(
        &self,
        activity: &Activity,
        candidate: &RankedCandidate<'_>,
        options: &MatchingOptions,
        ambiguous: bool,
    ) -> WorkoutMatch {
        let score = &candidate.score;
        let conflict_reason = if ambiguous {
            Some(ConflictReason::AmbiguousCandidates)
        } else {
            self.mismatched_factor(&score.factors)
                .map(ConflictReason::FactorMismatch)
        };

        let match_type = if conflict_reason.is_some() {
            MatchType::Conflict
        } else if score.confidence >= self.config.exact_threshold {
            MatchType::Exact
        } else if score.confidence >= self.config.probable_threshold {
            MatchType::Probable
        } else {
            MatchType::Possible
        };

        let discrepancies = detect_discrepancies(activity, candidate.workout, score, options);
        let suggestions = build_suggestions(match_type, conflict_reason, &discrepancies);

        WorkoutMatch {
            activity_id: activity.id().to_owned(),
            workout_id: candidate.workout.id.clone(),
            confidence: score.confidence,
            match_type,
            factors: score.factors,
            day_difference: score.day_difference,
            discrepancies,
            suggestions,
            conflict_reason,
        }
    }

    /// First content factor at or below the conflict floor
    fn mismatched_factor(&self, factors: &FactorScores) -> Option<DiscrepancyField> {
        let floor = self.config.conflict_factor_floor;
        [
            (DiscrepancyField::Distance, factors.distance),
            (DiscrepancyField::Duration, factors.duration),
            (DiscrepancyField::Type, factors.workout_type),
        ]
        .into_iter()
        .find_map(|(field, score)| score.filter(|s| *s <= floor).map(|_| field))
    }
}

fn rank_candidates(a: &RankedCandidate<'_>, b: &RankedCandidate<'_>) -> Ordering {
    b.score
        .confidence
        .total_cmp(&a.score.confidence)
        .then_with(|| {
            a.score
                .day_difference
                .unsigned_abs()
                .cmp(&b.score.day_difference.unsigned_abs())
        })
        .then_with(|| {
            a.score
                .distance_gap_miles
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.score.distance_gap_miles.unwrap_or(f64::INFINITY))
        })
        .then_with(|| a.workout.id.cmp(&b.workout.id))
}

fn build_suggestions(
    match_type: MatchType,
    conflict_reason: Option<ConflictReason>,
    discrepancies: &[Discrepancy],
) -> Vec<String> {
    let mut suggestions = vec![match (match_type, conflict_reason) {
        (MatchType::Exact, _) => "Strong match; safe to link automatically".to_owned(),
        (MatchType::Probable, _) => "Likely match; review the details before linking".to_owned(),
        (MatchType::Possible, _) => {
            "Low-confidence match; confirm manually before linking".to_owned()
        }
        (MatchType::Conflict, Some(ConflictReason::AmbiguousCandidates)) => {
            "Several planned workouts match equally well; choose the right one manually".to_owned()
        }
        (MatchType::Conflict, Some(ConflictReason::FactorMismatch(field))) => format!(
            "The {field} conflicts with the plan; confirm this is the same workout before linking"
        ),
        (MatchType::Conflict, None) => "Confirm this match manually before linking".to_owned(),
    }];

    suggestions.extend(discrepancies.iter().map(|discrepancy| match discrepancy.field {
        DiscrepancyField::Date => format!(
            "Move the workout to {} if the athlete rescheduled it",
            discrepancy.actual
        ),
        DiscrepancyField::Distance => format!(
            "Record the actual distance ({}) on the workout",
            discrepancy.actual
        ),
        DiscrepancyField::Duration => format!(
            "Record the actual moving time ({}) on the workout",
            discrepancy.actual
        ),
        DiscrepancyField::Type => format!(
            "Check whether this {} belongs to a different planned workout",
            discrepancy.actual
        ),
    }));

    suggestions
}

/// Rank candidate workouts for one activity with the default scoring configuration
///
/// # Errors
///
/// See [`WorkoutMatcher::match_activity`].
pub fn match_activity_to_workouts(
    activity: &Activity,
    workouts: &[PlannedWorkout],
    options: &MatchingOptions,
) -> AppResult<Vec<WorkoutMatch>> {
    WorkoutMatcher::default().match_activity(activity, workouts, options)
}
