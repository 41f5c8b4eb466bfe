// ABOUTME: Benchmark fixtures generating activities and planned workouts for matching
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for the matching engine.
//!
//! Generates a training block of planned workouts and a matching set of
//! activities with realistic drift in date, distance, and duration.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use workout_sync::{Activity, ActivityBuilder, PlannedWorkout, SportType};

/// Meters per mile
const METERS_PER_MILE: f64 = 1609.344;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset (10 activities) - a single week
    Small,
    /// Medium dataset (100 activities) - the per-request cap
    Medium,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

fn block_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap_or_default()
}

/// One planned workout per day, cycling through a weekly pattern
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_workouts(count: usize) -> Vec<PlannedWorkout> {
    (0..count)
        .map(|index| {
            let date = block_start() + Duration::days(index as i64);
            let (tag, miles, minutes) = match index % 7 {
                0 => ("rest", 0.0, 0.0),
                1 => ("easy", 5.0, 45.0),
                2 => ("intervals", 6.0, 50.0),
                3 => ("recovery", 4.0, 38.0),
                4 => ("tempo", 7.0, 55.0),
                5 => ("cross_training", 0.0, 60.0),
                _ => ("long_run", 10.0 + (index % 5) as f64, 95.0),
            };
            PlannedWorkout::new(format!("workout_{index}"), "bench-plan", date)
                .with_distance_miles(miles)
                .with_duration_minutes(minutes)
                .with_type(tag)
        })
        .collect()
}

/// Activities roughly following the planned block, some a day late
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_activities(size: BatchSize) -> Vec<Activity> {
    (0..size.count())
        .map(|index| {
            let day = block_start() + Duration::days((index + index % 3 / 2) as i64);
            let start = Utc.from_utc_datetime(&day.and_hms_opt(6, 30, 0).unwrap_or_default());
            let sport_type = if index % 7 == 5 {
                SportType::Ride
            } else {
                SportType::Run
            };
            let miles = 4.0 + ((index * 37) % 70) as f64 / 10.0;
            let seconds = 2400 + ((index * 113) % 3600) as u64;

            ActivityBuilder::new(
                format!("activity_{index}"),
                format!("Benchmark Activity {index}"),
                sport_type,
                start,
            )
            .distance_meters(miles * METERS_PER_MILE)
            .moving_time_seconds(seconds)
            .build()
        })
        .collect()
}
