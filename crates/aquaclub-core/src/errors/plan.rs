// ABOUTME: Plan-generation error types for the nutrition and training flows
// ABOUTME: Separates input validation, output validation, generation failure and service errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # Plan Error Types
//!
//! - `PlanError` - failures of a single plan-generation run
//! - Conversion to `AppError` for the surrounding application

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AppError, ErrorCode, FieldError};

/// Which generator produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Weekly nutrition plan
    Nutrition,
    /// Multi-week training mesocycle
    Training,
}

impl PlanKind {
    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nutrition => "nutrition",
            Self::Training => "training",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by a plan-generation flow.
///
/// Every variant is terminal: flows never retry or repair.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Caller input did not satisfy the input contract
    #[error("invalid {plan} plan input: {}", join_fields(.errors))]
    InvalidInput {
        /// Plan being generated
        plan: PlanKind,
        /// Field-level failures
        errors: Vec<FieldError>,
    },

    /// Generated output did not satisfy the output contract
    #[error("generated {plan} plan does not match its schema: {}", join_fields(.errors))]
    InvalidOutput {
        /// Plan being generated
        plan: PlanKind,
        /// Field-level failures
        errors: Vec<FieldError>,
    },

    /// The generation service returned nothing usable
    #[error("could not generate a {plan} plan: {reason}")]
    GenerationFailed {
        /// Plan being generated
        plan: PlanKind,
        /// Why the output was unusable
        reason: String,
    },

    /// Transport or provider failure from the generation service
    #[error(transparent)]
    Service(#[from] AppError),
}

impl PlanError {
    /// Create an input validation error
    #[must_use]
    pub const fn invalid_input(plan: PlanKind, errors: Vec<FieldError>) -> Self {
        Self::InvalidInput { plan, errors }
    }

    /// Create an output validation error
    #[must_use]
    pub const fn invalid_output(plan: PlanKind, errors: Vec<FieldError>) -> Self {
        Self::InvalidOutput { plan, errors }
    }

    /// Create a generation failure
    #[must_use]
    pub fn generation_failed(plan: PlanKind, reason: impl Into<String>) -> Self {
        Self::GenerationFailed {
            plan,
            reason: reason.into(),
        }
    }

    /// Field-level details, empty for non-validation errors
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidInput { errors, .. } | Self::InvalidOutput { errors, .. } => errors,
            Self::GenerationFailed { .. } | Self::Service(_) => &[],
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::InvalidOutput { .. } => ErrorCode::OutputSchemaMismatch,
            Self::GenerationFailed { .. } => ErrorCode::GenerationFailed,
            Self::Service(err) => err.code,
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let code = error.code();
        match error {
            PlanError::Service(inner) => inner,
            PlanError::InvalidInput { plan, errors } | PlanError::InvalidOutput { plan, errors } => {
                let message = format!("{plan} plan: {}", join_fields(&errors));
                Self::new(code, message).with_field_errors(errors)
            }
            PlanError::GenerationFailed { plan, reason } => Self::new(
                ErrorCode::GenerationFailed,
                format!("could not generate a {plan} plan: {reason}"),
            ),
        }
    }
}
