// ABOUTME: Discrepancy detection between planned workout targets and actual activity values
// ABOUTME: Flags fields whose error exceeds half the tolerance, with severity and descriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use workout_core::constants::matching::{TYPE_DISCREPANCY_THRESHOLD, TYPE_HIGH_SEVERITY_THRESHOLD};
use workout_core::models::{Activity, PlannedWorkout};

use crate::config::MatchingOptions;
use crate::scoring::CandidateScore;

/// Field that diverges from the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyField {
    /// Calendar date
    Date,
    /// Distance
    Distance,
    /// Duration
    Duration,
    /// Sport / workout type
    Type,
}

impl fmt::Display for DiscrepancyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Type => "type",
        })
    }
}

/// How far outside the expected range a value is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Between half the tolerance and the tolerance
    Low,
    /// Up to twice the tolerance
    Medium,
    /// Beyond twice the tolerance
    High,
}

impl Severity {
    fn from_ratio(error: f64, tolerance: f64) -> Self {
        if tolerance > 0.0 && error <= tolerance {
            Self::Low
        } else if tolerance > 0.0 && error <= 2.0 * tolerance {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// A named field where the activity diverges from the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Mismatched field
    pub field: DiscrepancyField,
    /// Planned value, formatted with units
    pub planned: String,
    /// Actual value, formatted with units
    pub actual: String,
    /// Severity
    pub severity: Severity,
    /// Human-readable description
    pub description: String,
}

/// Collect discrepancies for a scored candidate, in field order
///
/// A field is reported when its error exceeds half of its tolerance; type
/// is reported when compatibility drops below 0.5.
#[must_use]
pub fn detect_discrepancies(
    activity: &Activity,
    workout: &PlannedWorkout,
    score: &CandidateScore,
    options: &MatchingOptions,
) -> Vec<Discrepancy> {
    let mut discrepancies = Vec::new();

    #[allow(clippy::cast_precision_loss)]
    let days = score.day_difference.unsigned_abs() as f64;
    let date_tolerance = f64::from(options.date_tolerance_days);
    if days > date_tolerance / 2.0 {
        let direction = if score.day_difference > 0 {
            "after"
        } else {
            "before"
        };
        discrepancies.push(Discrepancy {
            field: DiscrepancyField::Date,
            planned: workout.date.to_string(),
            actual: activity.calendar_date().to_string(),
            severity: Severity::from_ratio(days, date_tolerance),
            description: format!(
                "Completed {} day{} {direction} the planned date",
                score.day_difference.unsigned_abs(),
                plural(score.day_difference.unsigned_abs())
            ),
        });
    }

    if let (Some(error), Some(planned)) = (score.distance_error, workout.usable_distance_miles()) {
        if error > options.distance_tolerance / 2.0 {
            let actual = activity.distance_miles();
            discrepancies.push(Discrepancy {
                field: DiscrepancyField::Distance,
                planned: format!("{planned:.2} mi"),
                actual: format!("{actual:.2} mi"),
                severity: Severity::from_ratio(error, options.distance_tolerance),
                description: format!(
                    "Distance was {:.0}% {} than planned",
                    error * 100.0,
                    if actual > planned { "longer" } else { "shorter" }
                ),
            });
        }
    }

    if let (Some(error), Some(planned)) =
        (score.duration_error, workout.usable_duration_minutes())
    {
        if error > options.duration_tolerance / 2.0 {
            let actual = activity.moving_time_minutes();
            discrepancies.push(Discrepancy {
                field: DiscrepancyField::Duration,
                planned: format!("{planned:.0} min"),
                actual: format!("{actual:.0} min"),
                severity: Severity::from_ratio(error, options.duration_tolerance),
                description: format!(
                    "Moving time was {:.0}% {} than planned",
                    error * 100.0,
                    if actual > planned { "longer" } else { "shorter" }
                ),
            });
        }
    }

    if let Some(compatibility) = score.factors.workout_type {
        if compatibility < TYPE_DISCREPANCY_THRESHOLD {
            let planned = planned_type_label(workout);
            discrepancies.push(Discrepancy {
                field: DiscrepancyField::Type,
                actual: activity.sport_type().to_string(),
                severity: if compatibility < TYPE_HIGH_SEVERITY_THRESHOLD {
                    Severity::High
                } else {
                    Severity::Medium
                },
                description: format!(
                    "Activity type {} does not fit planned {planned}",
                    activity.sport_type()
                ),
                planned,
            });
        }
    }

    discrepancies
}

fn planned_type_label(workout: &PlannedWorkout) -> String {
    match (&workout.workout_type, &workout.terrain) {
        (Some(workout_type), Some(terrain)) => format!("{workout_type} ({terrain})"),
        (Some(workout_type), None) => workout_type.to_string(),
        (None, Some(terrain)) => terrain.to_string(),
        (None, None) => "workout".to_owned(),
    }
}

const fn plural(count: u64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
