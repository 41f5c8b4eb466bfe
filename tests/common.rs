// ABOUTME: Shared fixtures for matching integration tests
// ABOUTME: Builds activities and planned workouts with sensible defaults for scenarios
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used
)]
//! Shared test utilities for `workout_sync`

use chrono::{NaiveDate, TimeZone, Utc};
use workout_sync::{Activity, ActivityBuilder, PlannedWorkout, SportType};

/// Meters in ten miles, rounded the way trackers report it
pub const TEN_MILES_METERS: f64 = 16_090.0;

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// June 1st 2024, the reference day of most scenarios
pub fn race_day() -> NaiveDate {
    date(2024, 6, 1)
}

/// Run starting at 07:00 UTC on the given day
pub fn run_on(id: &str, day: NaiveDate, meters: f64, seconds: u64) -> Activity {
    activity_on(id, SportType::Run, day, meters, seconds)
}

/// Activity of any sport starting at 07:00 UTC on the given day
pub fn activity_on(
    id: &str,
    sport_type: SportType,
    day: NaiveDate,
    meters: f64,
    seconds: u64,
) -> Activity {
    let start = Utc.from_utc_datetime(&day.and_hms_opt(7, 0, 0).unwrap());
    ActivityBuilder::new(id, format!("Activity {id}"), sport_type, start)
        .distance_meters(meters)
        .moving_time_seconds(seconds)
        .build()
}

/// Ten-mile, one-hour run on the reference day
pub fn ten_mile_run(id: &str) -> Activity {
    run_on(id, race_day(), TEN_MILES_METERS, 3600)
}

/// Planned workout with distance and duration targets
pub fn workout(id: &str, day: NaiveDate, miles: f64, minutes: f64) -> PlannedWorkout {
    PlannedWorkout::new(id, "plan-1", day)
        .with_distance_miles(miles)
        .with_duration_minutes(minutes)
}

/// Ten-mile, one-hour workout on the reference day
pub fn ten_mile_workout(id: &str) -> PlannedWorkout {
    workout(id, race_day(), 10.0, 60.0)
}
