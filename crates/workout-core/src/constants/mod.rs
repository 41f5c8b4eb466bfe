// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and matching defaults for the workout matching engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Matching defaults, weights, and thresholds
pub mod matching;
