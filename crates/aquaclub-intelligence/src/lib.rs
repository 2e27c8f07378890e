// ABOUTME: Body-composition intelligence for athlete records
// ABOUTME: BMI, BMI classification and U.S. Navy body-fat percentage calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![deny(unsafe_code)]

//! # Aquaclub Intelligence
//!
//! Pure numeric calculators used by athlete dashboards. Nothing in this crate
//! performs I/O or keeps state: identical inputs always yield identical
//! outputs, and invalid or insufficient inputs yield `None` instead of an
//! error so the caller can render "insufficient data".

/// BMI and body-fat percentage calculators
pub mod body_composition;

/// Published coefficients and thresholds used by the calculators
pub mod physiological_constants;

pub use body_composition::{
    calculate_bmi, calculate_body_fat_percentage, classify_bmi, BmiCategory,
    BodyCompositionReport, BodyMeasurements,
};
