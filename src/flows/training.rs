// ABOUTME: Training mesocycle flow: category, methodology and objective in, weekly microcycles out
// ABOUTME: Attaches the methodology narrative, renders the prompt and checks one microcycle per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use serde_json::Value;

use super::{decode_input, decode_output, run_generation, GenerationRequest, GenerationService};
use crate::constants::language;
use crate::errors::{AppError, PlanError, PlanKind};
use crate::llm::prompts::{render, TRAINING_PLAN_TEMPLATE};
use crate::models::{TrainingPlanInput, TrainingPlanOutput};
use crate::schemas::{training_input_schema, training_output_schema, Schema};

const PLAN: PlanKind = PlanKind::Training;

/// Generates multi-week training mesocycles
#[derive(Debug)]
pub struct TrainingPlanFlow<S> {
    service: S,
    input_schema: Schema,
}

impl<S: GenerationService> TrainingPlanFlow<S> {
    /// Create a flow over `service`
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            input_schema: training_input_schema(),
        }
    }

    /// Generation service used by this flow
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Attach the narrative description of the selected methodology
    ///
    /// Any caller-supplied description is replaced.
    #[must_use]
    pub fn augment(mut input: TrainingPlanInput) -> TrainingPlanInput {
        input.methodology_description = Some(input.methodology.description().to_owned());
        input
    }

    /// Render the instruction for an augmented `input`
    #[must_use]
    pub fn render_instruction(input: &TrainingPlanInput) -> String {
        let weeks = input.weeks.to_string();
        let description = input
            .methodology_description
            .as_deref()
            .unwrap_or_else(|| input.methodology.description());
        render(
            TRAINING_PLAN_TEMPLATE,
            &[
                ("weeks", &weeks),
                ("category", input.category.trim()),
                ("methodology", input.methodology.as_str()),
                ("methodology_name", input.methodology.display_name()),
                ("methodology_description", description),
                ("mesocycle_objective", input.mesocycle_objective.trim()),
                ("target_language", language::TARGET_LANGUAGE),
            ],
        )
    }

    /// Generate a mesocycle for a typed input
    ///
    /// # Errors
    ///
    /// See [`Self::generate_from_value`].
    pub async fn generate(&self, input: &TrainingPlanInput) -> Result<TrainingPlanOutput, PlanError> {
        let value = serde_json::to_value(input).map_err(AppError::from)?;
        self.generate_from_value(&value).await
    }

    /// Generate a mesocycle for a raw JSON input record
    ///
    /// The output must hold exactly `weeks` microcycles.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `input` does not match the input schema; the
    ///   service is not called
    /// - `GenerationFailed` if the service returns no usable output
    /// - `InvalidOutput` if the output does not match the mesocycle schema
    /// - `Service` for provider or transport failures
    pub async fn generate_from_value(&self, input: &Value) -> Result<TrainingPlanOutput, PlanError> {
        let input: TrainingPlanInput = decode_input(PLAN, &self.input_schema, input)?;
        let input = Self::augment(input);
        let output_schema = training_output_schema(input.weeks);

        let request = GenerationRequest {
            plan: PLAN,
            instruction: Self::render_instruction(&input),
            input: serde_json::to_value(&input).map_err(AppError::from)?,
            output_schema: output_schema.to_json_schema(),
        };

        let output = run_generation(&self.service, &request, &output_schema).await?;
        decode_output(PLAN, output)
    }
}
