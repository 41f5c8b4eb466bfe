// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per statute mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Convert meters to miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Convert seconds to minutes
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: activity durations are far below 2^52 seconds
pub fn seconds_to_minutes(seconds: u64) -> f64 {
    seconds as f64 / SECONDS_PER_MINUTE
}
