// ABOUTME: Planned workout model with status, workout type, and terrain tags
// ABOUTME: Scheduled training sessions that tracker activities are matched against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a planned workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    /// Scheduled and awaiting completion
    #[default]
    Planned,
    /// Already linked to a completed activity
    Completed,
    /// Deliberately skipped by the athlete
    Skipped,
    /// Date passed without an activity
    Missed,
    /// Removed from the plan by the coach
    Cancelled,
}

/// Planned workout type as written by the coach
///
/// Stored as free text upstream; known values are recognized and anything
/// else is preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkoutType {
    /// Easy aerobic run
    Easy,
    /// Recovery run
    Recovery,
    /// Tempo / threshold run
    Tempo,
    /// Interval session
    Interval,
    /// Long run
    LongRun,
    /// Race
    Race,
    /// Fartlek
    Fartlek,
    /// Hill repeats
    Hill,
    /// Progression run
    Progression,
    /// Non-running aerobic work
    CrossTraining,
    /// Strength session
    Strength,
    /// Bike session
    Bike,
    /// Swim session
    Swim,
    /// Planned rest day
    Rest,
    /// Unrecognized type
    Other(String),
}

impl WorkoutType {
    /// Canonical tag for this workout type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Recovery => "recovery",
            Self::Tempo => "tempo",
            Self::Interval => "interval",
            Self::LongRun => "long_run",
            Self::Race => "race",
            Self::Fartlek => "fartlek",
            Self::Hill => "hill",
            Self::Progression => "progression",
            Self::CrossTraining => "cross_training",
            Self::Strength => "strength",
            Self::Bike => "bike",
            Self::Swim => "swim",
            Self::Rest => "rest",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for WorkoutType {
    fn from(tag: &str) -> Self {
        match tag.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "easy" | "easy_run" | "base" => Self::Easy,
            "recovery" | "recovery_run" => Self::Recovery,
            "tempo" | "threshold" => Self::Tempo,
            "interval" | "intervals" | "speed" | "track_workout" => Self::Interval,
            "long_run" | "long" => Self::LongRun,
            "race" => Self::Race,
            "fartlek" => Self::Fartlek,
            "hill" | "hills" | "hill_repeats" => Self::Hill,
            "progression" => Self::Progression,
            "cross_training" | "cross" | "xt" => Self::CrossTraining,
            "strength" | "gym" => Self::Strength,
            "bike" | "ride" | "cycling" => Self::Bike,
            "swim" | "swimming" => Self::Swim,
            "rest" | "off" => Self::Rest,
            _ => Self::Other(tag.to_owned()),
        }
    }
}

impl From<String> for WorkoutType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<WorkoutType> for String {
    fn from(workout_type: WorkoutType) -> Self {
        match workout_type {
            WorkoutType::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned running surface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Terrain {
    /// Road or path
    Road,
    /// Trail
    Trail,
    /// Athletics track
    Track,
    /// Treadmill or indoor trainer
    Treadmill,
    /// Unrecognized terrain
    Other(String),
}

impl Terrain {
    /// Canonical tag for this terrain
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Road => "road",
            Self::Trail => "trail",
            Self::Track => "track",
            Self::Treadmill => "treadmill",
            Self::Other(tag) => tag,
        }
    }

    /// Whether the terrain implies an indoor session
    #[must_use]
    pub const fn is_indoor(&self) -> bool {
        matches!(self, Self::Treadmill)
    }
}

impl From<&str> for Terrain {
    fn from(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "road" | "path" => Self::Road,
            "trail" | "trails" => Self::Trail,
            "track" => Self::Track,
            "treadmill" | "indoor" | "trainer" => Self::Treadmill,
            _ => Self::Other(tag.to_owned()),
        }
    }
}

impl From<String> for Terrain {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<Terrain> for String {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled training session within a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    /// Unique identifier
    pub id: String,
    /// Owning training plan
    pub plan_id: String,
    /// Calendar date the workout is scheduled for
    pub date: NaiveDate,
    /// Planned distance in miles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_distance_miles: Option<f64>,
    /// Planned duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_duration_minutes: Option<f64>,
    /// Planned workout type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<WorkoutType>,
    /// Free-form category (e.g. "base", "build", "taper")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form intensity tag (e.g. "easy", "moderate", "hard")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Planned surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
    /// Lifecycle status
    #[serde(default)]
    pub status: WorkoutStatus,
    /// Coach notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlannedWorkout {
    /// Create a planned workout with no targets
    #[must_use]
    pub fn new(id: impl Into<String>, plan_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            plan_id: plan_id.into(),
            date,
            planned_distance_miles: None,
            planned_duration_minutes: None,
            workout_type: None,
            category: None,
            intensity: None,
            terrain: None,
            status: WorkoutStatus::Planned,
            notes: None,
        }
    }

    /// Set the planned distance in miles
    #[must_use]
    pub const fn with_distance_miles(mut self, miles: f64) -> Self {
        self.planned_distance_miles = Some(miles);
        self
    }

    /// Set the planned duration in minutes
    #[must_use]
    pub const fn with_duration_minutes(mut self, minutes: f64) -> Self {
        self.planned_duration_minutes = Some(minutes);
        self
    }

    /// Set the planned workout type
    #[must_use]
    pub fn with_type(mut self, workout_type: impl Into<WorkoutType>) -> Self {
        self.workout_type = Some(workout_type.into());
        self
    }

    /// Set the planned terrain
    #[must_use]
    pub fn with_terrain(mut self, terrain: impl Into<Terrain>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn with_status(mut self, status: WorkoutStatus) -> Self {
        self.status = status;
        self
    }

    /// Planned distance, only when usable as a divisor
    #[must_use]
    pub fn usable_distance_miles(&self) -> Option<f64> {
        self.planned_distance_miles
            .filter(|miles| miles.is_finite() && *miles > 0.0)
    }

    /// Planned duration, only when usable as a divisor
    #[must_use]
    pub fn usable_duration_minutes(&self) -> Option<f64> {
        self.planned_duration_minutes
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
    }
}
