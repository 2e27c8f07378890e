// ABOUTME: Core data models for the Aquaclub plan generators and athlete records
// ABOUTME: Re-exports nutrition, training and athlete types from their domain modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! Core data models
//!
//! All records here are ephemeral: they are built per request, serialized to
//! the generative model or the caller, and dropped.

/// Athlete attributes used by the body-composition calculators
pub mod athlete;
/// Weekly nutrition plan input and output records
pub mod nutrition;
/// Training mesocycle input and output records
pub mod training;

pub use athlete::Gender;
pub use nutrition::{DailyMealPlan, DietType, NutritionPlanInput, NutritionPlanOutput, Weekday};
pub use training::{Methodology, Microcycle, Session, TrainingPlanInput, TrainingPlanOutput};
