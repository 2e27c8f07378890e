// ABOUTME: Published coefficients for the body-composition formulas
// ABOUTME: U.S. Navy circumference method constants and WHO BMI band limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! Physiological constants based on published anthropometric research

/// U.S. Navy circumference method (metric form)
///
/// References:
/// - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for
///   U.S. Navy men and women from body circumferences and height.
///   Naval Health Research Center, Reports 84-11 and 84-29.
pub mod navy_body_fat {
    /// Numerator of the Siri-style conversion
    pub const SIRI_NUMERATOR: f64 = 495.0;
    /// Offset subtracted after the conversion
    pub const SIRI_OFFSET: f64 = 450.0;

    /// Male density intercept
    pub const MALE_INTERCEPT: f64 = 1.0324;
    /// Male coefficient on log10(waist - neck)
    pub const MALE_CIRCUMFERENCE_COEFFICIENT: f64 = 0.19077;
    /// Male coefficient on log10(height)
    pub const MALE_HEIGHT_COEFFICIENT: f64 = 0.15456;

    /// Female density intercept
    pub const FEMALE_INTERCEPT: f64 = 1.29579;
    /// Female coefficient on log10(waist + hip - neck)
    pub const FEMALE_CIRCUMFERENCE_COEFFICIENT: f64 = 0.35004;
    /// Female coefficient on log10(height)
    pub const FEMALE_HEIGHT_COEFFICIENT: f64 = 0.22100;
}

/// World Health Organization adult BMI bands (kg/m²)
///
/// Reference: WHO Technical Report Series 894 (2000), Obesity: preventing and
/// managing the global epidemic.
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
    /// Below this value: normal weight
    pub const NORMAL_LIMIT: f64 = 25.0;
    /// Below this value: overweight; at or above: obese
    pub const OVERWEIGHT_LIMIT: f64 = 30.0;
}

/// Centimeters per meter
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Results are reported with this many decimals
pub const RESULT_DECIMALS: i32 = 2;
