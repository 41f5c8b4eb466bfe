// ABOUTME: Type compatibility table between tracker sport types and planned workout tags
// ABOUTME: Produces partial credit in [0,1] from discipline, workout type, terrain, and trainer flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::models::{
    Activity, Discipline, PlannedWorkout, SportType, Terrain, WorkoutType,
};

/// Credit for the activity's discipline being exactly what was planned
const FULL_CREDIT: f64 = 1.0;

/// Credit for a plausible substitute (cross training on a bike, walking an easy day)
const SUBSTITUTE_CREDIT: f64 = 0.6;

/// Credit for gym or walking sessions logged as cross training
const ALTERNATE_CARDIO_CREDIT: f64 = 0.8;

/// Credit for walking or hiking a running workout
const WALK_FOR_RUN_CREDIT: f64 = 0.4;

/// Credit for gym work logged against a cardio workout
const GYM_FOR_CARDIO_CREDIT: f64 = 0.1;

/// Credit for a different sport entirely
const WRONG_SPORT_CREDIT: f64 = 0.05;

/// Credit when the planned type is unknown free text
const UNKNOWN_TYPE_CREDIT: f64 = 0.5;

/// Credit when only terrain was planned (running surfaces imply running)
const TERRAIN_ONLY_NON_RUN_CREDIT: f64 = 0.3;

/// Multiplier for an outdoor activity against a treadmill workout
const OUTDOOR_FOR_TREADMILL: f64 = 0.7;

/// Multiplier for a trainer activity against an outdoor-surface workout
const INDOOR_FOR_OUTDOOR: f64 = 0.8;

/// Multiplier for a non-trail run against a trail workout
const ROAD_FOR_TRAIL: f64 = 0.9;

/// Score how well an activity's sport fits a workout's planned type and terrain
///
/// Returns `None` when the workout carries neither a type nor a terrain, so
/// the factor can be excluded from the weighted sum.
#[must_use]
pub fn type_compatibility(activity: &Activity, workout: &PlannedWorkout) -> Option<f64> {
    if workout.workout_type.is_none() && workout.terrain.is_none() {
        return None;
    }

    let discipline = activity.sport_type().discipline();
    let base = workout.workout_type.as_ref().map_or_else(
        || {
            if discipline == Discipline::Run {
                FULL_CREDIT
            } else {
                TERRAIN_ONLY_NON_RUN_CREDIT
            }
        },
        |planned| discipline_credit(discipline, planned),
    );

    let surface = workout
        .terrain
        .as_ref()
        .map_or(1.0, |terrain| terrain_multiplier(activity, discipline, terrain));

    Some((base * surface).clamp(0.0, 1.0))
}

fn discipline_credit(discipline: Discipline, planned: &WorkoutType) -> f64 {
    match planned {
        WorkoutType::Easy
        | WorkoutType::Recovery
        | WorkoutType::Tempo
        | WorkoutType::Interval
        | WorkoutType::LongRun
        | WorkoutType::Race
        | WorkoutType::Fartlek
        | WorkoutType::Hill
        | WorkoutType::Progression => running_credit(discipline, planned),
        WorkoutType::Bike => single_sport_credit(discipline, Discipline::Ride),
        WorkoutType::Swim => single_sport_credit(discipline, Discipline::Swim),
        WorkoutType::CrossTraining => match discipline {
            Discipline::Ride | Discipline::Swim | Discipline::Other => FULL_CREDIT,
            Discipline::Walk | Discipline::Gym => ALTERNATE_CARDIO_CREDIT,
            Discipline::Run => SUBSTITUTE_CREDIT,
        },
        WorkoutType::Strength => match discipline {
            Discipline::Gym => FULL_CREDIT,
            _ => GYM_FOR_CARDIO_CREDIT,
        },
        // Anything logged on a rest day is unexpected, but still the athlete's day
        WorkoutType::Rest => GYM_FOR_CARDIO_CREDIT,
        WorkoutType::Other(_) => UNKNOWN_TYPE_CREDIT,
    }
}

fn running_credit(discipline: Discipline, planned: &WorkoutType) -> f64 {
    match discipline {
        Discipline::Run => FULL_CREDIT,
        Discipline::Walk => match planned {
            WorkoutType::Easy | WorkoutType::Recovery => SUBSTITUTE_CREDIT,
            _ => WALK_FOR_RUN_CREDIT,
        },
        Discipline::Gym => GYM_FOR_CARDIO_CREDIT,
        Discipline::Ride | Discipline::Swim | Discipline::Other => WRONG_SPORT_CREDIT,
    }
}

fn single_sport_credit(discipline: Discipline, expected: Discipline) -> f64 {
    if discipline == expected {
        FULL_CREDIT
    } else if discipline == Discipline::Gym {
        GYM_FOR_CARDIO_CREDIT
    } else {
        WRONG_SPORT_CREDIT
    }
}

fn terrain_multiplier(activity: &Activity, discipline: Discipline, terrain: &Terrain) -> f64 {
    let indoor = activity.is_indoor();
    if terrain.is_indoor() {
        return if indoor { 1.0 } else { OUTDOOR_FOR_TREADMILL };
    }
    match terrain {
        Terrain::Road | Terrain::Track | Terrain::Trail if indoor => INDOOR_FOR_OUTDOOR,
        Terrain::Trail
            if discipline == Discipline::Run && *activity.sport_type() != SportType::TrailRun =>
        {
            ROAD_FOR_TRAIL
        }
        _ => 1.0,
    }
}
