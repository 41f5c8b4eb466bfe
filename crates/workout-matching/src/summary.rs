// ABOUTME: Summarizes a batch matching result into tier counts and actionable suggestions
// ABOUTME: Counts unmatched workouts and activities, contested workouts, and best-match tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use workout_core::models::{Activity, PlannedWorkout};

use crate::batch::BatchMatchResult;
use crate::matcher::MatchType;

/// Totals over the batch input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Activities in the batch
    pub activities: usize,
    /// Candidate workouts in the batch
    pub workouts: usize,
    /// Activities with at least one match
    pub matches: usize,
}

/// Best-match tier counts, one per matched activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    /// Best match is `exact`
    pub exact: usize,
    /// Best match is `probable`
    pub probable: usize,
    /// Best match is `possible`
    pub possible: usize,
    /// Best match is `conflict`
    pub conflicts: usize,
}

/// Reduction of a batch matching result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSummary {
    /// Input and match totals
    pub total: SummaryTotals,
    /// Tier counts over each activity's best match
    pub by_type: TierCounts,
    /// Candidate workouts referenced by no returned match
    pub unmatched_workouts: usize,
    /// Activities with no match at all
    pub unmatched_activities: usize,
    /// Workouts that are the best match of more than one activity
    pub contested_workouts: usize,
    /// Plain-language suggestions for the batch
    pub suggestions: Vec<String>,
}

/// Reduce a batch result to counts and suggestions
///
/// Only each activity's best-ranked match counts towards the tiers. Matches
/// referencing workouts outside `workouts` are ignored for the unmatched
/// count, so `unmatched_workouts` plus matched workouts never exceeds the
/// number of distinct candidate workouts.
#[must_use]
pub fn generate_matching_summary(
    activities: &[Activity],
    workouts: &[PlannedWorkout],
    match_results: &BatchMatchResult,
) -> MatchingSummary {
    let mut by_type = TierCounts::default();
    let mut best_claims: HashMap<&str, usize> = HashMap::new();
    let mut matches = 0;

    for best in match_results.values().filter_map(|list| list.first()) {
        matches += 1;
        match best.match_type {
            MatchType::Exact => by_type.exact += 1,
            MatchType::Probable => by_type.probable += 1,
            MatchType::Possible => by_type.possible += 1,
            MatchType::Conflict => by_type.conflicts += 1,
        }
        *best_claims.entry(best.workout_id.as_str()).or_insert(0) += 1;
    }

    let referenced: HashSet<&str> = match_results
        .values()
        .flatten()
        .map(|m| m.workout_id.as_str())
        .collect();
    let candidate_ids: HashSet<&str> = workouts.iter().map(|w| w.id.as_str()).collect();
    let unmatched_workouts = candidate_ids.difference(&referenced).count();

    let unmatched_activities = activities
        .iter()
        .filter(|activity| {
            match_results
                .get(activity.id())
                .is_none_or(Vec::is_empty)
        })
        .count();

    let contested_workouts = best_claims.values().filter(|claims| **claims > 1).count();

    let mut summary = MatchingSummary {
        total: SummaryTotals {
            activities: activities.len(),
            workouts: workouts.len(),
            matches,
        },
        by_type,
        unmatched_workouts,
        unmatched_activities,
        contested_workouts,
        suggestions: Vec::new(),
    };
    summary.suggestions = summary_suggestions(&summary);
    summary
}

fn summary_suggestions(summary: &MatchingSummary) -> Vec<String> {
    let mut suggestions = Vec::new();

    if summary.unmatched_workouts > 0 {
        suggestions.push(format!(
            "{} planned workout{} no matching activity; consider logging {} manually or marking {} skipped",
            summary.unmatched_workouts,
            if summary.unmatched_workouts == 1 { " has" } else { "s have" },
            them_or_it(summary.unmatched_workouts),
            them_or_it(summary.unmatched_workouts),
        ));
    }

    if summary.unmatched_activities > 0 {
        suggestions.push(format!(
            "{} activit{} no planned workout; consider creating workouts for {} or widening the date tolerance",
            summary.unmatched_activities,
            if summary.unmatched_activities == 1 { "y matched" } else { "ies matched" },
            them_or_it(summary.unmatched_activities),
        ));
    }

    if summary.by_type.conflicts > 0 {
        suggestions.push(format!(
            "{} match{} conflicting details; review before linking",
            summary.by_type.conflicts,
            if summary.by_type.conflicts == 1 { " has" } else { "es have" },
        ));
    }

    if summary.by_type.possible > 0 {
        suggestions.push(format!(
            "{} low-confidence match{} manual confirmation",
            summary.by_type.possible,
            if summary.by_type.possible == 1 { " needs" } else { "es need" },
        ));
    }

    if summary.contested_workouts > 0 {
        suggestions.push(format!(
            "{} planned workout{} the best match for more than one activity; decide which activity completes {}",
            summary.contested_workouts,
            if summary.contested_workouts == 1 { " is" } else { "s are" },
            them_or_it(summary.contested_workouts),
        ));
    }

    if summary.total.matches > 0
        && summary.by_type.exact == summary.total.matches
        && summary.contested_workouts == 0
    {
        suggestions.push("All matched activities can be linked automatically".to_owned());
    }

    suggestions
}

const fn them_or_it(count: usize) -> &'static str {
    if count == 1 {
        "it"
    } else {
        "them"
    }
}
