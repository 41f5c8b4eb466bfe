// ABOUTME: Core data models for activity-to-workout matching
// ABOUTME: Re-exports tracker activities, sport types, and planned workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod activity;
mod sport;
mod workout;

pub use activity::{Activity, ActivityBuilder};

pub use sport::{Discipline, SportType};

pub use workout::{PlannedWorkout, Terrain, WorkoutStatus, WorkoutType};
