// ABOUTME: Body-composition calculators using peer-reviewed anthropometric formulas
// ABOUTME: BMI, WHO BMI classification and U.S. Navy body-fat percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! Body Composition Module
//!
//! Calculators behind the athlete record cards. Inputs come straight from
//! stored athlete documents, so every measurement is optional; a missing,
//! non-positive or non-finite measurement produces `None` rather than an
//! error.
//!
//! # Scientific References
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for
//!   U.S. Navy men and women from body circumferences and height.
//! - WHO (2000). Obesity: preventing and managing the global epidemic.
//!   Technical Report Series 894.

use aquaclub_core::models::Gender;
use serde::{Deserialize, Serialize};

use crate::physiological_constants::{
    bmi as bmi_bands, navy_body_fat as navy, CENTIMETERS_PER_METER, RESULT_DECIMALS,
};

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    Normal,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Spanish label shown on athlete cards
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Bajo peso",
            Self::Normal => "Peso normal",
            Self::Overweight => "Sobrepeso",
            Self::Obese => "Obesidad",
        }
    }
}

/// Raw measurements as stored on an athlete record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurements {
    /// Recorded gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Body weight, kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Standing height, centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Waist circumference at the navel, centimeters
    #[serde(default)]
    pub waist_cm: Option<f64>,
    /// Neck circumference below the larynx, centimeters
    #[serde(default)]
    pub neck_cm: Option<f64>,
    /// Hip circumference at the widest point, centimeters
    #[serde(default)]
    pub hip_cm: Option<f64>,
}

/// Derived body-composition figures for an athlete card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionReport {
    /// Body Mass Index, `None` when weight or height is unusable
    pub bmi: Option<f64>,
    /// WHO band for `bmi`
    pub bmi_category: Option<BmiCategory>,
    /// Estimated body-fat percentage, `None` when measurements are insufficient
    pub body_fat_percentage: Option<f64>,
}

impl BodyCompositionReport {
    /// Compute every figure the measurements allow
    #[must_use]
    pub fn from_measurements(measurements: &BodyMeasurements) -> Self {
        let bmi = calculate_bmi(measurements.weight_kg, measurements.height_cm);
        let body_fat_percentage = measurements.gender.and_then(|gender| {
            navy_body_fat(
                gender,
                measurements.height_cm,
                measurements.waist_cm,
                measurements.neck_cm,
                measurements.hip_cm,
            )
        });

        Self {
            bmi,
            bmi_category: bmi.and_then(classify_bmi),
            body_fat_percentage,
        }
    }
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// Returns `None` unless both inputs are present, finite and strictly
/// positive. The result is rounded to 2 decimals.
#[must_use]
pub fn calculate_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = positive(weight_kg)?;
    let height_m = positive(height_cm)? / CENTIMETERS_PER_METER;

    finite_rounded(weight / (height_m * height_m))
}

/// Classify a BMI value into its WHO band
///
/// Returns `None` for non-finite or non-positive values.
#[must_use]
pub fn classify_bmi(bmi: f64) -> Option<BmiCategory> {
    positive(Some(bmi))?;

    let category = if bmi < bmi_bands::UNDERWEIGHT_LIMIT {
        BmiCategory::Underweight
    } else if bmi < bmi_bands::NORMAL_LIMIT {
        BmiCategory::Normal
    } else if bmi < bmi_bands::OVERWEIGHT_LIMIT {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Some(category)
}

/// Estimate body-fat percentage with the U.S. Navy circumference method
///
/// `gender` is the label stored on the athlete record (`Masculino`,
/// `Femenino`, `male`, `female`, ...). Unknown labels yield `None`.
///
/// - Male: `495 / (1.0324 − 0.19077·log10(waist − neck) + 0.15456·log10(height)) − 450`
/// - Female: `495 / (1.29579 − 0.35004·log10(waist + hip − neck) + 0.22100·log10(height)) − 450`
///
/// Height, waist and neck are required; hip is required for women only.
/// A circumference difference that is not positive leaves the logarithm
/// undefined and yields `None`, as does any non-finite result.
#[must_use]
pub fn calculate_body_fat_percentage(
    gender: Option<&str>,
    height_cm: Option<f64>,
    waist_cm: Option<f64>,
    neck_cm: Option<f64>,
    hip_cm: Option<f64>,
) -> Option<f64> {
    let gender = Gender::parse(gender?)?;
    navy_body_fat(gender, height_cm, waist_cm, neck_cm, hip_cm)
}

fn navy_body_fat(
    gender: Gender,
    height_cm: Option<f64>,
    waist_cm: Option<f64>,
    neck_cm: Option<f64>,
    hip_cm: Option<f64>,
) -> Option<f64> {
    let height = positive(height_cm)?;
    let waist = positive(waist_cm)?;
    let neck = positive(neck_cm)?;

    let density = match gender {
        Gender::Male => {
            let circumference = positive(Some(waist - neck))?;
            navy::MALE_CIRCUMFERENCE_COEFFICIENT.mul_add(
                -circumference.log10(),
                navy::MALE_HEIGHT_COEFFICIENT.mul_add(height.log10(), navy::MALE_INTERCEPT),
            )
        }
        Gender::Female => {
            let hip = positive(hip_cm)?;
            let circumference = positive(Some(waist + hip - neck))?;
            navy::FEMALE_CIRCUMFERENCE_COEFFICIENT.mul_add(
                -circumference.log10(),
                navy::FEMALE_HEIGHT_COEFFICIENT.mul_add(height.log10(), navy::FEMALE_INTERCEPT),
            )
        }
    };

    finite_rounded(navy::SIRI_NUMERATOR / density - navy::SIRI_OFFSET)
}

/// Keep a measurement only if it is finite and strictly positive
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Round to the reporting precision, rejecting NaN and infinities
fn finite_rounded(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let factor = 10f64.powi(RESULT_DECIMALS);
    Some((value * factor).round() / factor)
}
