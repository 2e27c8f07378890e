// ABOUTME: Plan generation flows for weekly nutrition plans and training mesocycles
// ABOUTME: Shared single-attempt run step mapping service results onto PlanError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # Plan Generation Flows
//!
//! Every flow runs the same pipeline:
//!
//! 1. Validate the input record against its descriptor
//! 2. Augment it with the Spanish narrative for its enumeration tag
//! 3. Render the instruction template
//! 4. Call the [`GenerationService`] exactly once
//! 5. Validate the output against its descriptor and decode it
//!
//! There is no retry and no repair: any failure ends the run with a
//! [`PlanError`](crate::errors::PlanError).

mod generation;
mod nutrition;
mod training;

pub use generation::{parse_model_output, GenerationRequest, GenerationService, LlmGenerationService};
pub use nutrition::NutritionPlanFlow;
pub use training::TrainingPlanFlow;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{ErrorCode, FieldError, PlanError, PlanKind};
use crate::schemas::Schema;

/// Check a raw input record and decode it
fn decode_input<T: DeserializeOwned>(
    plan: PlanKind,
    schema: &Schema,
    input: &Value,
) -> Result<T, PlanError> {
    schema
        .validate(input)
        .map_err(|errors| PlanError::invalid_input(plan, errors))?;
    serde_json::from_value(input.clone())
        .map_err(|e| PlanError::invalid_input(plan, vec![FieldError::new("", e.to_string())]))
}

/// Decode a validated output record
fn decode_output<T: DeserializeOwned>(plan: PlanKind, output: Value) -> Result<T, PlanError> {
    serde_json::from_value(output)
        .map_err(|e| PlanError::invalid_output(plan, vec![FieldError::new("", e.to_string())]))
}

fn is_empty_output(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Call the service once and check its output against `output_schema`
#[instrument(skip_all, fields(plan = %request.plan, run_id = %Uuid::new_v4()))]
async fn run_generation<S: GenerationService + ?Sized>(
    service: &S,
    request: &GenerationRequest,
    output_schema: &Schema,
) -> Result<Value, PlanError> {
    let plan = request.plan;
    info!("Generating {plan} plan");

    let output = match service.generate(request).await {
        Ok(Some(value)) if !is_empty_output(&value) => value,
        Ok(_) => {
            warn!("Generation service returned an empty {plan} plan");
            return Err(PlanError::generation_failed(plan, "the model returned no output"));
        }
        Err(error) if error.code == ErrorCode::GenerationFailed => {
            warn!("Generation failed: {error}");
            return Err(PlanError::generation_failed(plan, error.message));
        }
        Err(error) => {
            warn!("Generation service error: {error}");
            return Err(PlanError::Service(error));
        }
    };

    if let Err(errors) = output_schema.validate(&output) {
        warn!(
            failures = errors.len(),
            "Generated {plan} plan does not match its schema"
        );
        return Err(PlanError::invalid_output(plan, errors));
    }

    info!("Generated {plan} plan");
    Ok(output)
}
