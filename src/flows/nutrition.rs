// ABOUTME: Weekly nutrition plan flow: diet type in, seven days of five meals out
// ABOUTME: Describes the diet in Spanish, renders the prompt and validates the generated week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use serde_json::Value;

use super::{decode_input, decode_output, run_generation, GenerationRequest, GenerationService};
use crate::constants::language;
use crate::errors::{AppError, PlanError, PlanKind};
use crate::llm::prompts::{render, NUTRITION_PLAN_TEMPLATE};
use crate::models::{NutritionPlanInput, NutritionPlanOutput};
use crate::schemas::{nutrition_input_schema, nutrition_output_schema, Schema};

const PLAN: PlanKind = PlanKind::Nutrition;

/// Generates weekly meal plans
#[derive(Debug)]
pub struct NutritionPlanFlow<S> {
    service: S,
    input_schema: Schema,
    output_schema: Schema,
}

impl<S: GenerationService> NutritionPlanFlow<S> {
    /// Create a flow over `service`
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            input_schema: nutrition_input_schema(),
            output_schema: nutrition_output_schema(),
        }
    }

    /// Generation service used by this flow
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Render the instruction for `input`
    #[must_use]
    pub fn render_instruction(input: &NutritionPlanInput) -> String {
        render(
            NUTRITION_PLAN_TEMPLATE,
            &[
                ("diet_type", input.diet_type.as_str()),
                ("diet_description", input.diet_type.description()),
                ("target_language", language::TARGET_LANGUAGE),
            ],
        )
    }

    /// Generate a plan for a typed input
    ///
    /// # Errors
    ///
    /// See [`Self::generate_from_value`].
    pub async fn generate(
        &self,
        input: &NutritionPlanInput,
    ) -> Result<NutritionPlanOutput, PlanError> {
        let value = serde_json::to_value(input).map_err(AppError::from)?;
        self.generate_from_value(&value).await
    }

    /// Generate a plan for a raw JSON input record
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `input` does not match the input schema; the
    ///   service is not called
    /// - `GenerationFailed` if the service returns no usable output
    /// - `InvalidOutput` if the output does not match the weekly plan schema
    /// - `Service` for provider or transport failures
    pub async fn generate_from_value(&self, input: &Value) -> Result<NutritionPlanOutput, PlanError> {
        let input: NutritionPlanInput = decode_input(PLAN, &self.input_schema, input)?;

        let request = GenerationRequest {
            plan: PLAN,
            instruction: Self::render_instruction(&input),
            input: serde_json::to_value(input).map_err(AppError::from)?,
            output_schema: self.output_schema.to_json_schema(),
        };

        let output = run_generation(&self.service, &request, &self.output_schema).await?;
        decode_output(PLAN, output)
    }
}
