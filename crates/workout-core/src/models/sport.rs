// ABOUTME: Sport type enumeration for tracker activities
// ABOUTME: Parses provider sport strings and groups sports into matching disciplines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of supported sport/activity types
///
/// Covers the activity types a tracker commonly reports. The `Other`
/// variant keeps provider-specific types that don't map to a standard
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running activity
    Run,
    /// Trail running
    TrailRun,
    /// Treadmill / virtual running activity
    VirtualRun,
    /// Cycling activity
    Ride,
    /// Indoor/trainer cycling activity
    VirtualRide,
    /// Mountain biking activity
    MountainBike,
    /// Gravel cycling activity
    GravelRide,
    /// Electric bike ride
    EbikeRide,
    /// Swimming activity
    Swim,
    /// Walking activity
    Walk,
    /// Hiking activity
    Hike,
    /// Generic workout/exercise activity
    Workout,
    /// Weight/strength training
    StrengthTraining,
    /// `CrossFit` workout
    Crossfit,
    /// Yoga practice
    Yoga,
    /// Rowing activity
    Rowing,
    /// Elliptical trainer session
    Elliptical,
    /// Other activity type not covered by standard categories
    Other(String),
}

/// Coarse grouping of sports used by the type compatibility table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Running in any form
    Run,
    /// Cycling in any form
    Ride,
    /// Swimming
    Swim,
    /// Walking and hiking
    Walk,
    /// Gym work: strength, crossfit, yoga, generic workouts
    Gym,
    /// Other cardio machines and sports
    Other,
}

impl SportType {
    /// Create `SportType` from a provider string (Strava `type` / `sport_type`)
    #[must_use]
    pub fn from_provider_string(provider_sport: &str) -> Self {
        match provider_sport.trim().to_lowercase().as_str() {
            "run" => Self::Run,
            "trailrun" | "trail_run" | "trailrunning" => Self::TrailRun,
            "virtualrun" | "virtual_run" | "treadmill" => Self::VirtualRun,
            "ride" => Self::Ride,
            "virtualride" | "virtual_ride" => Self::VirtualRide,
            "mountainbikeride" | "mountain_bike" | "mountainbike" => Self::MountainBike,
            "gravelride" | "gravel_ride" => Self::GravelRide,
            "ebikeride" | "ebike_ride" | "emountainbikeride" => Self::EbikeRide,
            "swim" => Self::Swim,
            "walk" => Self::Walk,
            "hike" => Self::Hike,
            "workout" => Self::Workout,
            "weighttraining" | "strength_training" => Self::StrengthTraining,
            "crossfit" => Self::Crossfit,
            "yoga" => Self::Yoga,
            "rowing" => Self::Rowing,
            "elliptical" => Self::Elliptical,
            _ => Self::Other(provider_sport.to_owned()),
        }
    }

    /// Matching discipline this sport belongs to
    #[must_use]
    pub const fn discipline(&self) -> Discipline {
        match self {
            Self::Run | Self::TrailRun | Self::VirtualRun => Discipline::Run,
            Self::Ride
            | Self::VirtualRide
            | Self::MountainBike
            | Self::GravelRide
            | Self::EbikeRide => Discipline::Ride,
            Self::Swim => Discipline::Swim,
            Self::Walk | Self::Hike => Discipline::Walk,
            Self::Workout | Self::StrengthTraining | Self::Crossfit | Self::Yoga => {
                Discipline::Gym
            }
            Self::Rowing | Self::Elliptical | Self::Other(_) => Discipline::Other,
        }
    }

    /// Whether the sport type itself implies an indoor/trainer session
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::VirtualRun | Self::VirtualRide)
    }

    /// Human-readable name, matching the provider spelling where possible
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Run => "Run",
            Self::TrailRun => "TrailRun",
            Self::VirtualRun => "VirtualRun",
            Self::Ride => "Ride",
            Self::VirtualRide => "VirtualRide",
            Self::MountainBike => "MountainBikeRide",
            Self::GravelRide => "GravelRide",
            Self::EbikeRide => "EBikeRide",
            Self::Swim => "Swim",
            Self::Walk => "Walk",
            Self::Hike => "Hike",
            Self::Workout => "Workout",
            Self::StrengthTraining => "WeightTraining",
            Self::Crossfit => "Crossfit",
            Self::Yoga => "Yoga",
            Self::Rowing => "Rowing",
            Self::Elliptical => "Elliptical",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
