// ABOUTME: Strava activity payload mapping into the internal Activity model
// ABOUTME: Total conversion with explicit defaulting rules, applied once at the boundary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Strava payload mapping
//!
//! Sync routes receive partial activity payloads (summary listings omit
//! fields that detail responses carry). Everything is adapted here so the
//! matching core only ever sees complete [`Activity`] records.
//!
//! Defaulting rules:
//!
//! | Field | Rule |
//! |-------|------|
//! | `id` | numeric or string, stringified |
//! | `name` | `"Untitled activity"` |
//! | sport | `sport_type`, then `type`, then `Workout` |
//! | `distance` | 0 m |
//! | `moving_time` | `elapsed_time`, then 0 s |
//! | `trainer` | `false` |
//! | `start_date` | required |
//! | `start_date_local` | optional; dropped with a warning when unparseable |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fmt;
use tracing::warn;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{Activity, ActivityBuilder, SportType};

/// Name given to activities that arrive without one
pub const DEFAULT_ACTIVITY_NAME: &str = "Untitled activity";

/// Strava activity identifier, numeric in the API but sometimes stringified
/// by intermediate layers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StravaId {
    /// Numeric id as returned by the API
    Numeric(u64),
    /// Id already converted to text
    Text(String),
}

impl fmt::Display for StravaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Strava activity payload; every field except `id` may be missing
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivityPayload {
    /// Activity id
    pub id: StravaId,
    /// Activity title
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy activity type (`Run`, `Ride`, ...)
    #[serde(default, rename = "type")]
    pub activity_type: Option<String>,
    /// Detailed sport type (`TrailRun`, `VirtualRide`, ...)
    #[serde(default)]
    pub sport_type: Option<String>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<u64>,
    /// Elapsed time in seconds
    #[serde(default)]
    pub elapsed_time: Option<u64>,
    /// UTC start timestamp (RFC 3339)
    #[serde(default)]
    pub start_date: Option<String>,
    /// Local start timestamp
    #[serde(default)]
    pub start_date_local: Option<String>,
    /// Recorded on a trainer
    #[serde(default)]
    pub trainer: Option<bool>,
    /// Elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    /// Average heart rate in BPM
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    /// Average speed in meters per second
    #[serde(default)]
    pub average_speed: Option<f64>,
    /// Kudos received
    #[serde(default)]
    pub kudos_count: Option<u32>,
    /// Comments received
    #[serde(default)]
    pub comment_count: Option<u32>,
    /// Achievements earned
    #[serde(default)]
    pub achievement_count: Option<u32>,
}

impl StravaActivityPayload {
    /// Convert into the internal activity model
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` without a start date, `InvalidFormat`
    /// when the start date doesn't parse, and `InvalidInput` when the
    /// resulting activity fails validation.
    pub fn into_activity(self) -> AppResult<Activity> {
        let id = self.id.to_string();

        let start_date = self
            .start_date
            .as_deref()
            .ok_or_else(|| AppError::missing_field("start_date").with_resource_id(&id))
            .and_then(|raw| {
                parse_utc_timestamp(raw).ok_or_else(|| {
                    AppError::invalid_format(format!("unparseable start_date: {raw}"))
                        .with_resource_id(&id)
                })
            })?;

        let sport_type = self
            .sport_type
            .as_deref()
            .or(self.activity_type.as_deref())
            .map_or(SportType::Workout, SportType::from_provider_string);

        let mut builder = ActivityBuilder::new(
            id.clone(),
            self.name.unwrap_or_else(|| DEFAULT_ACTIVITY_NAME.to_owned()),
            sport_type,
            start_date,
        )
        .distance_meters(self.distance.unwrap_or(0.0))
        .moving_time_seconds(self.moving_time.or(self.elapsed_time).unwrap_or(0))
        .trainer(self.trainer.unwrap_or(false));

        if let Some(raw) = self.start_date_local.as_deref() {
            match parse_local_timestamp(raw) {
                Some(local) => builder = builder.start_date_local(local),
                None => warn!(
                    activity_id = %id,
                    start_date_local = raw,
                    "Ignoring unparseable local start date"
                ),
            }
        }
        if let Some(gain) = self.total_elevation_gain {
            builder = builder.elevation_gain(gain);
        }
        if let Some(hr) = self.average_heartrate.filter(|hr| hr.is_finite() && *hr >= 0.0) {
            // Safe: filtered to non-negative finite BPM
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bpm = hr.round() as u32;
            builder = builder.average_heart_rate(bpm);
        }
        if let Some(speed) = self.average_speed {
            builder = builder.average_speed(speed);
        }
        if let Some(kudos) = self.kudos_count {
            builder = builder.kudos_count(kudos);
        }
        if let Some(comments) = self.comment_count {
            builder = builder.comment_count(comments);
        }
        if let Some(achievements) = self.achievement_count {
            builder = builder.achievement_count(achievements);
        }

        let activity = builder.build();
        activity.validate()?;
        Ok(activity)
    }
}

impl TryFrom<StravaActivityPayload> for Activity {
    type Error = AppError;

    fn try_from(payload: StravaActivityPayload) -> AppResult<Self> {
        payload.into_activity()
    }
}

/// Parse a JSON array of Strava activity payloads into activities
///
/// # Errors
///
/// Returns `SerializationError` for malformed JSON and the first mapping
/// error otherwise.
pub fn parse_activities(json: &str) -> AppResult<Vec<Activity>> {
    let payloads: Vec<StravaActivityPayload> = serde_json::from_str(json)?;
    payloads
        .into_iter()
        .map(StravaActivityPayload::into_activity)
        .collect()
}

/// RFC 3339 timestamp, or a bare date taken as UTC midnight
fn parse_utc_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Wall-clock time in the athlete's zone
///
/// Strava suffixes local times with `Z` even though they aren't UTC, so the
/// offset is discarded rather than applied.
fn parse_local_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
