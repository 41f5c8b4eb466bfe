// ABOUTME: Batch matching of many activities against one shared set of planned workouts
// ABOUTME: Parallel per-activity matching with all-or-nothing failure semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{Activity, PlannedWorkout};

use crate::config::MatchingOptions;
use crate::matcher::{WorkoutMatch, WorkoutMatcher};

/// Ranked matches keyed by activity id
pub type BatchMatchResult = BTreeMap<String, Vec<WorkoutMatch>>;

impl WorkoutMatcher {
    /// Match every activity against the full candidate list
    ///
    /// Candidates stay in the pool after being claimed, so several activities
    /// may rank the same workout; the summary reports such contested
    /// workouts. Activities are scored in parallel and the ordered map makes
    /// the output independent of scheduling.
    ///
    /// # Errors
    ///
    /// Fails as a whole when any activity fails to match or when two
    /// activities share an id, so no activity's entry is silently lost.
    pub fn match_batch(
        &self,
        activities: &[Activity],
        workouts: &[PlannedWorkout],
        options: &MatchingOptions,
    ) -> AppResult<BatchMatchResult> {
        let mut seen = HashSet::with_capacity(activities.len());
        if let Some(duplicate) = activities.iter().find(|a| !seen.insert(a.id())) {
            return Err(
                AppError::invalid_input("duplicate activity id in batch")
                    .with_resource_id(duplicate.id()),
            );
        }

        let results: BatchMatchResult = activities
            .par_iter()
            .map(|activity| {
                self.match_activity(activity, workouts, options)
                    .map(|matches| (activity.id().to_owned(), matches))
            })
            .collect::<AppResult<_>>()?;

        debug!(
            activities = activities.len(),
            workouts = workouts.len(),
            matched_activities = results.values().filter(|m| !m.is_empty()).count(),
            "Batch matched activities"
        );

        Ok(results)
    }
}

/// Match many activities with the default scoring configuration
///
/// Callers are expected to cap input at
/// [`workout_core::constants::matching::MAX_BATCH_ACTIVITIES`].
///
/// # Errors
///
/// See [`WorkoutMatcher::match_batch`].
pub fn batch_match_activities(
    activities: &[Activity],
    workouts: &[PlannedWorkout],
    options: &MatchingOptions,
) -> AppResult<BatchMatchResult> {
    WorkoutMatcher::default().match_batch(activities, workouts, options)
}
