// ABOUTME: Configuration module for the workout sync facade crate
// ABOUTME: Environment-driven matching configuration with validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Matching configuration loaded from environment variables
pub mod matching_config;

pub use matching_config::MatchingEnvironment;
