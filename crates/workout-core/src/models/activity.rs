// ABOUTME: Tracker activity model with builder, accessors, and validation
// ABOUTME: Immutable input to the matching engine, read-only during a match call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SportType;
use crate::constants::units::{meters_to_miles, seconds_to_minutes};
use crate::errors::{AppError, AppResult};

/// A single recorded exercise session from an external fitness tracker
///
/// Fields are private to keep the record consistent; use the accessors to
/// read and `ActivityBuilder` to construct new instances.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use workout_core::models::{ActivityBuilder, SportType};
///
/// let activity = ActivityBuilder::new(
///     "12345",
///     "Morning Run",
///     SportType::Run,
///     Utc.with_ymd_and_hms(2024, 6, 1, 7, 30, 0).unwrap(),
/// )
/// .distance_meters(16_090.0)
/// .moving_time_seconds(3600)
/// .build();
///
/// assert_eq!(activity.id(), "12345");
/// assert!((activity.distance_miles() - 10.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the activity (provider-specific, stringified)
    id: String,
    /// Human-readable name/title of the activity
    name: String,
    /// Type of sport/activity (run, ride, swim, etc.)
    sport_type: SportType,
    /// Total distance covered in meters
    distance_meters: f64,
    /// Moving time in seconds (excludes stopped time)
    moving_time_seconds: u64,
    /// When the activity started (UTC)
    start_date: DateTime<Utc>,
    /// When the activity started in the athlete's local time zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date_local: Option<NaiveDateTime>,
    /// Whether the activity was recorded on a trainer or indoors
    #[serde(default)]
    trainer: bool,
    /// Total elevation gained in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation_gain: Option<f64>,
    /// Average heart rate during the activity (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<u32>,
    /// Average speed in meters per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_speed: Option<f64>,
    /// Social engagement: kudos received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kudos_count: Option<u32>,
    /// Social engagement: comments received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment_count: Option<u32>,
    /// Achievements earned (segment PRs, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    achievement_count: Option<u32>,
}

impl Activity {
    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sport type
    #[must_use]
    pub const fn sport_type(&self) -> &SportType {
        &self.sport_type
    }

    /// Distance in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Moving time in seconds
    #[must_use]
    pub const fn moving_time_seconds(&self) -> u64 {
        self.moving_time_seconds
    }

    /// UTC start timestamp
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Local start timestamp, when the tracker reported one
    #[must_use]
    pub const fn start_date_local(&self) -> Option<NaiveDateTime> {
        self.start_date_local
    }

    /// Trainer/indoor flag as reported by the tracker
    #[must_use]
    pub const fn trainer(&self) -> bool {
        self.trainer
    }

    /// Elevation gain in meters
    #[must_use]
    pub const fn elevation_gain(&self) -> Option<f64> {
        self.elevation_gain
    }

    /// Average heart rate in BPM
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<u32> {
        self.average_heart_rate
    }

    /// Average speed in meters per second
    #[must_use]
    pub const fn average_speed(&self) -> Option<f64> {
        self.average_speed
    }

    /// Kudos received
    #[must_use]
    pub const fn kudos_count(&self) -> Option<u32> {
        self.kudos_count
    }

    /// Comments received
    #[must_use]
    pub const fn comment_count(&self) -> Option<u32> {
        self.comment_count
    }

    /// Achievements earned
    #[must_use]
    pub const fn achievement_count(&self) -> Option<u32> {
        self.achievement_count
    }

    /// Calendar date the activity counts towards
    ///
    /// Planned workouts are dated in the athlete's local calendar, so the
    /// local start date wins when present.
    #[must_use]
    pub fn calendar_date(&self) -> NaiveDate {
        self.start_date_local
            .map_or_else(|| self.start_date.date_naive(), |local| local.date())
    }

    /// Distance converted to miles
    #[must_use]
    pub fn distance_miles(&self) -> f64 {
        meters_to_miles(self.distance_meters)
    }

    /// Moving time converted to minutes
    #[must_use]
    pub fn moving_time_minutes(&self) -> f64 {
        seconds_to_minutes(self.moving_time_seconds)
    }

    /// Whether the session happened indoors (trainer flag or virtual sport)
    #[must_use]
    pub const fn is_indoor(&self) -> bool {
        self.trainer || self.sport_type.is_virtual()
    }

    /// Check numeric fields the matcher divides or compares with
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when distance is negative or not finite, or
    /// when an extended metric is not finite.
    pub fn validate(&self) -> AppResult<()> {
        if !self.distance_meters.is_finite() || self.distance_meters < 0.0 {
            return Err(AppError::invalid_input(format!(
                "activity distance must be a non-negative number, got {}",
                self.distance_meters
            ))
            .with_resource_id(&self.id));
        }

        let extended = [
            ("elevation_gain", self.elevation_gain),
            ("average_speed", self.average_speed),
        ];
        for (field, value) in extended {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(AppError::invalid_input(format!(
                    "activity {field} must be finite"
                ))
                .with_resource_id(&self.id));
            }
        }

        Ok(())
    }
}

/// Builder for [`Activity`]
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Start a builder with the required fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sport_type: SportType,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                name: name.into(),
                sport_type,
                distance_meters: 0.0,
                moving_time_seconds: 0,
                start_date,
                start_date_local: None,
                trainer: false,
                elevation_gain: None,
                average_heart_rate: None,
                average_speed: None,
                kudos_count: None,
                comment_count: None,
                achievement_count: None,
            },
        }
    }

    /// Set distance in meters
    #[must_use]
    pub const fn distance_meters(mut self, meters: f64) -> Self {
        self.activity.distance_meters = meters;
        self
    }

    /// Set moving time in seconds
    #[must_use]
    pub const fn moving_time_seconds(mut self, seconds: u64) -> Self {
        self.activity.moving_time_seconds = seconds;
        self
    }

    /// Set the local start timestamp
    #[must_use]
    pub const fn start_date_local(mut self, local: NaiveDateTime) -> Self {
        self.activity.start_date_local = Some(local);
        self
    }

    /// Set the trainer/indoor flag
    #[must_use]
    pub const fn trainer(mut self, trainer: bool) -> Self {
        self.activity.trainer = trainer;
        self
    }

    /// Set elevation gain in meters
    #[must_use]
    pub const fn elevation_gain(mut self, meters: f64) -> Self {
        self.activity.elevation_gain = Some(meters);
        self
    }

    /// Set average heart rate in BPM
    #[must_use]
    pub const fn average_heart_rate(mut self, bpm: u32) -> Self {
        self.activity.average_heart_rate = Some(bpm);
        self
    }

    /// Set average speed in meters per second
    #[must_use]
    pub const fn average_speed(mut self, meters_per_second: f64) -> Self {
        self.activity.average_speed = Some(meters_per_second);
        self
    }

    /// Set kudos received
    #[must_use]
    pub const fn kudos_count(mut self, kudos: u32) -> Self {
        self.activity.kudos_count = Some(kudos);
        self
    }

    /// Set comments received
    #[must_use]
    pub const fn comment_count(mut self, comments: u32) -> Self {
        self.activity.comment_count = Some(comments);
        self
    }

    /// Set achievements earned
    #[must_use]
    pub const fn achievement_count(mut self, achievements: u32) -> Self {
        self.activity.achievement_count = Some(achievements);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
