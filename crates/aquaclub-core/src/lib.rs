// ABOUTME: Core types and constants for the Aquaclub sports-club platform
// ABOUTME: Foundation crate with error handling, plan models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![deny(unsafe_code)]

//! # Aquaclub Core
//!
//! Foundation crate providing shared types and constants for the Aquaclub
//! club-management platform. This crate is designed to change infrequently,
//! so the calculators and the plan-generation flows can build on it without
//! pulling in HTTP or runtime dependencies.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, `PlanError` and `FieldError`
//! - **constants**: Domain constants (weekdays, meal slots, plan bounds)
//! - **models**: Plan input/output records and athlete enumerations

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (nutrition plans, training plans, athlete attributes)
pub mod models;
