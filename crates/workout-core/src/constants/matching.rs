// ABOUTME: Default tolerances, factor weights, and tier thresholds for workout matching
// ABOUTME: Single source of truth shared by options, scoring config, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default date tolerance in days
pub const DEFAULT_DATE_TOLERANCE_DAYS: u32 = 1;

/// Largest accepted date tolerance in days
pub const MAX_DATE_TOLERANCE_DAYS: u32 = 7;

/// Default relative distance tolerance (15%)
pub const DEFAULT_DISTANCE_TOLERANCE: f64 = 0.15;

/// Default relative duration tolerance (20%)
pub const DEFAULT_DURATION_TOLERANCE: f64 = 0.2;

/// Default minimum confidence for a candidate to be returned
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;

/// Weight of the date proximity factor
pub const DATE_WEIGHT: f64 = 0.4;

/// Weight of the distance similarity factor
pub const DISTANCE_WEIGHT: f64 = 0.25;

/// Weight of the duration similarity factor
pub const DURATION_WEIGHT: f64 = 0.2;

/// Weight of the type compatibility factor
pub const TYPE_WEIGHT: f64 = 0.15;

/// Confidence at or above which a match is `exact`
pub const EXACT_THRESHOLD: f64 = 0.85;

/// Confidence at or above which a match is `probable`
pub const PROBABLE_THRESHOLD: f64 = 0.65;

/// Content factor score at or below which a match is demoted to `conflict`
pub const DEFAULT_CONFLICT_FACTOR_FLOOR: f64 = 0.1;

/// Confidence gap under which the two best candidates are considered tied
pub const DEFAULT_AMBIGUITY_MARGIN: f64 = 0.02;

/// Type compatibility below which a type discrepancy is reported
pub const TYPE_DISCREPANCY_THRESHOLD: f64 = 0.5;

/// Type compatibility below which a type discrepancy is `high` severity
pub const TYPE_HIGH_SEVERITY_THRESHOLD: f64 = 0.25;

/// Recommended upper bound for one batch call; callers validate it
pub const MAX_BATCH_ACTIVITIES: usize = 100;
