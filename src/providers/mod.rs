// ABOUTME: Fitness provider payload adapters feeding the matching engine
// ABOUTME: Converts partial provider activity payloads into complete Activity records
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Provider boundary
//!
//! Each provider module owns the payload shape of one platform and a total
//! conversion into [`workout_core::models::Activity`].

/// Strava activity payloads
pub mod strava;

pub use strava::{parse_activities, StravaActivityPayload, StravaId};
