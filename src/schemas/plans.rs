// ABOUTME: Input and output descriptors of the nutrition and training plan generators
// ABOUTME: Keys come from the shared constants so models, prompts and schemas agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use super::{Field, Schema};
use crate::constants::{nutrition_fields, plan_limits, training_fields};
use crate::models::{DietType, Methodology, Weekday};

/// Nutrition generator input: `{ "dietType": <tag> }`
#[must_use]
pub fn nutrition_input_schema() -> Schema {
    Schema::object(vec![Field::required(
        nutrition_fields::DIET_TYPE,
        Schema::enumeration(DietType::tags()).describe("Objetivo de la dieta"),
    )])
}

fn daily_meal_schema() -> Schema {
    Schema::object(
        nutrition_fields::MEAL_SLOTS
            .into_iter()
            .map(|slot| Field::required(slot, Schema::non_empty_string()))
            .collect(),
    )
}

/// Nutrition generator output: seven required weekdays of five meals each
#[must_use]
pub fn nutrition_output_schema() -> Schema {
    Schema::object(
        Weekday::ALL
            .into_iter()
            .map(|day| Field::required(day.key(), daily_meal_schema().describe(day.spanish_name())))
            .collect(),
    )
    .describe("Plan de comidas semanal")
}

/// Training generator input
///
/// `methodologyDescription` is optional here because the flow fills it in
/// after validation.
#[must_use]
pub fn training_input_schema() -> Schema {
    Schema::object(vec![
        Field::required(
            training_fields::CATEGORY,
            Schema::non_empty_string().describe("Categoría del equipo o deportista"),
        ),
        Field::required(
            training_fields::METHODOLOGY,
            Schema::enumeration(Methodology::tags()),
        ),
        Field::optional(training_fields::METHODOLOGY_DESCRIPTION, Schema::string()),
        Field::required(
            training_fields::MESOCYCLE_OBJECTIVE,
            Schema::string().min_length(plan_limits::MIN_OBJECTIVE_LENGTH),
        ),
        Field::required(
            training_fields::WEEKS,
            Schema::integer()
                .minimum(i64::from(plan_limits::MIN_WEEKS))
                .maximum(i64::from(plan_limits::MAX_WEEKS)),
        ),
    ])
}

fn session_schema() -> Schema {
    Schema::object(vec![
        Field::required(training_fields::DAY, Schema::non_empty_string()),
        Field::required(training_fields::FOCUS, Schema::non_empty_string()),
        Field::required(
            training_fields::DURATION,
            Schema::integer()
                .minimum(i64::from(plan_limits::MIN_SESSION_MINUTES))
                .maximum(i64::from(plan_limits::MAX_SESSION_MINUTES))
                .describe("Duración en minutos"),
        ),
        Field::required(training_fields::ACTIVITIES, Schema::non_empty_string()),
        Field::optional(training_fields::FIELD_DIMENSIONS, Schema::string()),
        Field::optional(training_fields::PAUSES, Schema::string()),
    ])
}

fn microcycle_schema() -> Schema {
    Schema::object(vec![
        Field::required(
            training_fields::WEEK,
            Schema::non_empty_string().describe("Etiqueta de la semana, p. ej. \"Semana 1\""),
        ),
        Field::required(training_fields::MAIN_OBJECTIVE, Schema::non_empty_string()),
        Field::required(
            training_fields::SESSIONS,
            Schema::array(session_schema()).min_items(1),
        ),
    ])
}

/// Training generator output for a mesocycle of `weeks` weeks
///
/// The microcycle list must hold exactly one entry per week.
#[must_use]
pub fn training_output_schema(weeks: u8) -> Schema {
    Schema::object(vec![
        Field::required(
            training_fields::MESOCYCLE_OBJECTIVE,
            Schema::non_empty_string(),
        ),
        Field::required(
            training_fields::MICROCYCLES,
            Schema::array(microcycle_schema())
                .exact_items(usize::from(weeks))
                .describe("Un microciclo por semana, en orden"),
        ),
    ])
}
