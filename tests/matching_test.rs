// ABOUTME: Integration tests for single-activity matching against planned workouts
// ABOUTME: Covers scoring scenarios, ranking, conflict demotion, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    clippy::uninlined_format_args,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp,
    clippy::unreadable_literal,
    clippy::redundant_closure_for_method_calls,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::similar_names,
    clippy::items_after_statements,
    clippy::doc_markdown
)]

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{
    activity_on, date, race_day, run_on, ten_mile_run, ten_mile_workout, workout,
    TEN_MILES_METERS,
};
use workout_sync::{
    match_activity_to_workouts, ActivityBuilder, ConflictReason, DiscrepancyField, ErrorCode,
    MatchType, MatchingOptions, PlannedWorkout, Severity, SportType, WorkoutMatcher,
    WorkoutStatus,
};

const METERS_PER_MILE: f64 = 1609.344;

fn permissive() -> MatchingOptions {
    MatchingOptions::default().with_min_confidence(0.0)
}

#[test]
fn test_aligned_ten_mile_run_is_exact() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![ten_mile_workout("w-1")];

    let matches =
        match_activity_to_workouts(&activity, &workouts, &MatchingOptions::default()).unwrap();

    assert_eq!(matches.len(), 1);
    let best = &matches[0];
    assert_eq!(best.activity_id, "a-1");
    assert_eq!(best.workout_id, "w-1");
    assert_eq!(best.match_type, MatchType::Exact);
    assert!(best.confidence >= 0.85, "confidence {}", best.confidence);
    assert!(best.discrepancies.is_empty());
    assert_eq!(best.day_difference, 0);
    assert!(best.conflict_reason.is_none());
    assert!(best.factors.workout_type.is_none());
    assert_eq!(
        best.suggestions[0],
        "Strong match; safe to link automatically"
    );
}

#[test]
fn test_workout_outside_date_tolerance_is_excluded() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![workout("w-far", date(2024, 6, 6), 10.0, 60.0)];

    let matches =
        match_activity_to_workouts(&activity, &workouts, &MatchingOptions::default()).unwrap();

    assert!(matches.is_empty());
}

#[test]
fn test_date_window_is_a_hard_gate() {
    let activity = ten_mile_run("a-1");
    let two_days_out = workout("w-2d", date(2024, 6, 3), 10.0, 60.0);

    let matches = match_activity_to_workouts(&activity, &[two_days_out], &permissive()).unwrap();

    assert!(matches.is_empty(), "no score can compensate the date window");
}

#[test]
fn test_short_run_against_long_plan_is_conflict() {
    let activity = run_on("a-short", race_day(), 3.0 * METERS_PER_MILE, 3600);
    let workouts = vec![ten_mile_workout("w-1")];

    let matches =
        match_activity_to_workouts(&activity, &workouts, &MatchingOptions::default()).unwrap();

    assert_eq!(matches.len(), 1);
    let best = &matches[0];
    assert_eq!(best.match_type, MatchType::Conflict);
    assert_eq!(
        best.conflict_reason,
        Some(ConflictReason::FactorMismatch(DiscrepancyField::Distance))
    );
    assert_eq!(best.factors.distance, Some(0.0));

    let distance = best
        .discrepancies
        .iter()
        .find(|d| d.field == DiscrepancyField::Distance)
        .expect("distance discrepancy");
    assert_eq!(distance.severity, Severity::High);
    assert_eq!(distance.planned, "10.00 mi");
    assert_eq!(distance.actual, "3.00 mi");
    assert!(distance.description.contains("shorter"));
}

#[test]
fn test_workout_without_targets_scores_on_date_alone() {
    let activity = ten_mile_run("a-1");
    let bare = PlannedWorkout::new("w-bare", "plan-1", race_day());

    let matches =
        match_activity_to_workouts(&activity, &[bare], &MatchingOptions::default()).unwrap();

    let best = &matches[0];
    assert!((best.confidence - 1.0).abs() < 1e-12);
    assert_eq!(best.factors.date, 1.0);
    assert!(best.factors.distance.is_none());
    assert!(best.factors.duration.is_none());
    assert!(best.factors.workout_type.is_none());
    assert_eq!(best.match_type, MatchType::Exact);
}

#[test]
fn test_date_factor_decays_linearly_inside_window() {
    let activity = run_on("a-1", date(2024, 6, 2), TEN_MILES_METERS, 3600);
    let bare = PlannedWorkout::new("w-bare", "plan-1", race_day());
    let options = MatchingOptions::default().with_date_tolerance(2);

    let matches = match_activity_to_workouts(&activity, &[bare.clone()], &options).unwrap();

    let best = &matches[0];
    assert_eq!(best.day_difference, 1);
    assert!((best.factors.date - 0.5).abs() < 1e-12);
    assert!((best.confidence - 0.5).abs() < 1e-12);
    assert_eq!(best.match_type, MatchType::Possible);

    // Edge of a one-day window scores zero and falls below the default threshold
    let at_edge =
        match_activity_to_workouts(&activity, &[bare], &MatchingOptions::default()).unwrap();
    assert!(at_edge.is_empty());
}

#[test]
fn test_local_calendar_date_wins_over_utc() {
    let start = Utc.with_ymd_and_hms(2024, 6, 2, 3, 0, 0).unwrap();
    let local = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    let activity = ActivityBuilder::new("a-evening", "Evening run", SportType::Run, start)
        .distance_meters(TEN_MILES_METERS)
        .moving_time_seconds(3600)
        .start_date_local(local)
        .build();

    let matches = match_activity_to_workouts(
        &activity,
        &[ten_mile_workout("w-1")],
        &MatchingOptions::default(),
    )
    .unwrap();

    assert_eq!(matches[0].day_difference, 0);
    assert_eq!(matches[0].match_type, MatchType::Exact);
}

#[test]
fn test_slightly_short_run_is_probable_with_distance_discrepancy() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![workout("w-11", race_day(), 11.0, 60.0)];

    let matches =
        match_activity_to_workouts(&activity, &workouts, &MatchingOptions::default()).unwrap();

    let best = &matches[0];
    assert_eq!(best.match_type, MatchType::Probable);
    assert!(best.confidence > 0.65 && best.confidence < 0.85);
    assert_eq!(best.discrepancies.len(), 1);
    let discrepancy = &best.discrepancies[0];
    assert_eq!(discrepancy.field, DiscrepancyField::Distance);
    assert_eq!(discrepancy.severity, Severity::Low);
    assert_eq!(discrepancy.actual, "10.00 mi");
    assert_eq!(best.suggestions.len(), 2);
    assert!(best.suggestions[1].contains("10.00 mi"));
}

#[test]
fn test_candidates_ranked_by_confidence() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![
        workout("w-near", race_day(), 9.5, 60.0),
        ten_mile_workout("w-close"),
    ];

    let matches =
        match_activity_to_workouts(&activity, &workouts, &MatchingOptions::default()).unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].workout_id, "w-close");
    assert_eq!(matches[1].workout_id, "w-near");
    assert!(matches[0].confidence > matches[1].confidence);
    assert!(matches.iter().all(|m| m.conflict_reason.is_none()));
}

#[test]
fn test_equal_candidates_are_ambiguous_and_ordered_by_id() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![ten_mile_workout("w-b"), ten_mile_workout("w-a")];

    let matches =
        match_activity_to_workouts(&activity, &workouts, &MatchingOptions::default()).unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.workout_id.as_str()).collect();
    assert_eq!(ids, ["w-a", "w-b"]);
    for m in &matches {
        assert_eq!(m.match_type, MatchType::Conflict);
        assert_eq!(m.conflict_reason, Some(ConflictReason::AmbiguousCandidates));
    }
}

#[test]
fn test_wrong_sport_is_conflict_on_type() {
    let ride = activity_on("a-ride", SportType::Ride, race_day(), TEN_MILES_METERS, 3600);
    let tempo = ten_mile_workout("w-tempo").with_type("tempo");

    let matches =
        match_activity_to_workouts(&ride, &[tempo], &MatchingOptions::default()).unwrap();

    let best = &matches[0];
    assert_eq!(best.match_type, MatchType::Conflict);
    assert_eq!(
        best.conflict_reason,
        Some(ConflictReason::FactorMismatch(DiscrepancyField::Type))
    );
    let type_discrepancy = best
        .discrepancies
        .iter()
        .find(|d| d.field == DiscrepancyField::Type)
        .expect("type discrepancy");
    assert_eq!(type_discrepancy.severity, Severity::High);
    assert_eq!(type_discrepancy.planned, "tempo");
}

#[test]
fn test_zero_planned_targets_are_excluded_factors() {
    let activity = ten_mile_run("a-1");
    let zero_distance = workout("w-zero", race_day(), 0.0, 60.0);
    let negative_duration = workout("w-neg", race_day(), 10.0, -5.0);

    let matches =
        match_activity_to_workouts(&activity, &[zero_distance, negative_duration], &permissive())
            .unwrap();

    let zero = matches.iter().find(|m| m.workout_id == "w-zero").unwrap();
    assert!(zero.factors.distance.is_none());
    assert_eq!(zero.factors.duration, Some(1.0));
    assert!((zero.confidence - 1.0).abs() < 1e-12);

    let neg = matches.iter().find(|m| m.workout_id == "w-neg").unwrap();
    assert!(neg.factors.duration.is_none());
    assert!(neg.factors.distance.is_some());
}

#[test]
fn test_confidence_never_increases_with_distance_error() {
    let plan = vec![ten_mile_workout("w-1")];
    let mut previous = f64::INFINITY;

    for miles in [10.0, 10.3, 10.6, 11.0, 11.5, 12.0, 14.0] {
        let activity = run_on("a-1", race_day(), miles * METERS_PER_MILE, 3600);
        let matches = match_activity_to_workouts(&activity, &plan, &permissive()).unwrap();
        let confidence = matches[0].confidence;

        assert!((0.0..=1.0).contains(&confidence));
        assert!(
            confidence <= previous,
            "{miles} mi scored {confidence}, above {previous}"
        );
        previous = confidence;
    }
}

#[test]
fn test_min_confidence_filters_candidates() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![
        ten_mile_workout("w-close"),
        workout("w-near", race_day(), 9.5, 60.0),
    ];
    let strict = MatchingOptions::default().with_min_confidence(0.95);

    let matches = match_activity_to_workouts(&activity, &workouts, &strict).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].workout_id, "w-close");
    assert!(matches.iter().all(|m| m.confidence >= 0.95));
}

#[test]
fn test_non_planned_status_is_still_scored() {
    let activity = ten_mile_run("a-1");
    let done = ten_mile_workout("w-done").with_status(WorkoutStatus::Completed);

    let matches =
        match_activity_to_workouts(&activity, &[done], &MatchingOptions::default()).unwrap();

    assert_eq!(matches.len(), 1);
}

#[test]
fn test_empty_candidate_list_yields_no_matches() {
    let matches =
        match_activity_to_workouts(&ten_mile_run("a-1"), &[], &MatchingOptions::default())
            .unwrap();

    assert!(matches.is_empty());
}

#[test]
fn test_matching_is_deterministic() {
    let activity = ten_mile_run("a-1");
    let workouts = vec![
        ten_mile_workout("w-1").with_type("long_run"),
        workout("w-2", date(2024, 5, 31), 9.0, 55.0),
        workout("w-3", race_day(), 6.0, 40.0).with_terrain("trail"),
    ];
    let options = permissive();

    let first = match_activity_to_workouts(&activity, &workouts, &options).unwrap();
    let second = match_activity_to_workouts(&activity, &workouts, &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_activity_distance_is_rejected() {
    let activity = run_on("a-bad", race_day(), f64::NAN, 3600);

    let err = match_activity_to_workouts(
        &activity,
        &[ten_mile_workout("w-1")],
        &MatchingOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.resource_id.as_deref(), Some("a-bad"));
}

#[test]
fn test_out_of_range_options_are_clamped() {
    let options = MatchingOptions::new(30, 2.0, -1.0, 1.5);

    assert_eq!(options.date_tolerance_days, 7);
    assert_eq!(options.distance_tolerance, 1.0);
    assert_eq!(options.duration_tolerance, 0.0);
    assert_eq!(options.min_confidence, 1.0);

    let fallback = MatchingOptions::default().with_distance_tolerance(f64::NAN);
    assert_eq!(fallback.distance_tolerance, 0.15);
}

#[test]
fn test_zero_duration_tolerance_credits_exact_hit_only() {
    let activity = run_on("a-1", race_day(), TEN_MILES_METERS, 3660);
    let options = permissive().with_duration_tolerance(0.0);

    let matches =
        match_activity_to_workouts(&activity, &[ten_mile_workout("w-1")], &options).unwrap();

    assert_eq!(matches[0].factors.duration, Some(0.0));
}

#[test]
fn test_custom_matcher_uses_its_thresholds() {
    let mut config = *WorkoutMatcher::default().config();
    config.exact_threshold = 0.99;
    config.probable_threshold = 0.5;
    let matcher = WorkoutMatcher::new(config).unwrap();

    let activity = ten_mile_run("a-1");
    let matches = matcher
        .match_activity(
            &activity,
            &[workout("w-near", race_day(), 9.5, 60.0)],
            &MatchingOptions::default(),
        )
        .unwrap();

    assert_eq!(matches[0].match_type, MatchType::Probable);
}

#[test]
fn test_match_serializes_snake_case_tags() {
    let activity = run_on("a-short", race_day(), 3.0 * METERS_PER_MILE, 3600);
    let matches = match_activity_to_workouts(
        &activity,
        &[ten_mile_workout("w-1")],
        &MatchingOptions::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&matches[0]).unwrap();
    assert_eq!(json["match_type"], "conflict");
    assert_eq!(json["conflict_reason"]["kind"], "factor_mismatch");
    assert_eq!(json["conflict_reason"]["field"], "distance");

    let exact = match_activity_to_workouts(
        &ten_mile_run("a-1"),
        &[ten_mile_workout("w-1")],
        &MatchingOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&exact[0]).unwrap();
    assert_eq!(json["match_type"], "exact");
    assert!(json.get("conflict_reason").is_none());
}

#[test]
fn test_widening_tolerances_never_lowers_confidence() {
    let activity = run_on("a-1", date(2024, 6, 2), 10.8 * METERS_PER_MILE, 3900);
    let workouts = vec![ten_mile_workout("w-1")];
    let narrow = permissive().with_date_tolerance(1);

    let base = match_activity_to_workouts(&activity, &workouts, &narrow).unwrap()[0].confidence;

    for widened in [
        narrow.with_date_tolerance(3),
        narrow.with_distance_tolerance(0.3),
        narrow.with_duration_tolerance(0.5),
    ] {
        let confidence =
            match_activity_to_workouts(&activity, &workouts, &widened).unwrap()[0].confidence;
        assert!(confidence >= base, "{confidence} < {base} for {widened:?}");
    }
}

#[test]
fn test_late_long_run_reports_date_and_duration_discrepancies() {
    let activity = run_on("a-late", date(2024, 6, 3), TEN_MILES_METERS, 78 * 60);
    let workouts = vec![ten_mile_workout("w-1")];
    let options = permissive().with_date_tolerance(3);

    let matches = match_activity_to_workouts(&activity, &workouts, &options).unwrap();
    let best = &matches[0];

    assert_eq!(best.day_difference, 2);
    assert_eq!(best.match_type, MatchType::Conflict);
    assert_eq!(
        best.conflict_reason,
        Some(ConflictReason::FactorMismatch(DiscrepancyField::Duration))
    );
    assert_eq!(best.discrepancies.len(), 2);

    let late = &best.discrepancies[0];
    assert_eq!(late.field, DiscrepancyField::Date);
    assert_eq!(late.planned, "2024-06-01");
    assert_eq!(late.actual, "2024-06-03");
    assert_eq!(late.severity, Severity::Low);
    assert_eq!(late.description, "Completed 2 days after the planned date");

    let long = &best.discrepancies[1];
    assert_eq!(long.field, DiscrepancyField::Duration);
    assert_eq!(long.planned, "60 min");
    assert_eq!(long.actual, "78 min");
    assert_eq!(long.severity, Severity::Medium);
    assert_eq!(long.description, "Moving time was 30% longer than planned");

    assert_eq!(best.suggestions.len(), 3);
    assert_eq!(
        best.suggestions[1],
        "Move the workout to 2024-06-03 if the athlete rescheduled it"
    );
    assert_eq!(
        best.suggestions[2],
        "Record the actual moving time (78 min) on the workout"
    );
}

#[test]
fn test_early_run_reports_date_before_plan() {
    let activity = run_on("a-early", date(2024, 5, 30), TEN_MILES_METERS, 3600);
    let workouts = vec![ten_mile_workout("w-1")];
    let options = permissive().with_date_tolerance(3);

    let matches = match_activity_to_workouts(&activity, &workouts, &options).unwrap();
    let best = &matches[0];

    assert_eq!(best.day_difference, -2);
    assert_eq!(best.discrepancies.len(), 1);
    assert_eq!(best.discrepancies[0].field, DiscrepancyField::Date);
    assert_eq!(best.discrepancies[0].severity, Severity::Low);
    assert_eq!(
        best.discrepancies[0].description,
        "Completed 2 days before the planned date"
    );
}
