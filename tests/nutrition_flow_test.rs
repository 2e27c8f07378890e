// ABOUTME: Integration tests for the weekly nutrition plan flow
// ABOUTME: Uses a counting stub service to cover augmentation, validation and failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use aquaclub::errors::{AppError, ErrorCode, PlanError, PlanKind};
use aquaclub::flows::NutritionPlanFlow;
use aquaclub::llm::prompts::unfilled_slots;
use aquaclub::models::{DietType, NutritionPlanInput, Weekday};
use common::{conformant_week, StubGenerationService};
use serde_json::{json, Value};

#[tokio::test]
async fn test_every_diet_type_yields_full_week() {
    for diet_type in DietType::ALL {
        let stub = StubGenerationService::returning(conformant_week());
        let flow = NutritionPlanFlow::new(&stub);

        let plan = flow
            .generate(&NutritionPlanInput::new(diet_type))
            .await
            .unwrap_or_else(|e| panic!("{diet_type}: {e}"));

        assert_eq!(plan.days().count(), 7);
        for (day, meals) in plan.days() {
            for (slot, text) in meals.slots() {
                assert!(!text.trim().is_empty(), "{diet_type} {day:?} {slot} is empty");
            }
        }
        assert_eq!(stub.calls(), 1);
    }
}

#[tokio::test]
async fn test_request_carries_instruction_input_and_schema() {
    let stub = StubGenerationService::returning(conformant_week());
    let flow = NutritionPlanFlow::new(&stub);

    flow.generate(&NutritionPlanInput::new(DietType::Vegan))
        .await
        .unwrap();

    let request = stub.last_request().unwrap();
    assert_eq!(request.plan, PlanKind::Nutrition);
    assert_eq!(request.input, json!({ "dietType": "vegan" }));
    assert!(request.instruction.contains(DietType::Vegan.description()));
    assert!(request.instruction.contains("español"));
    assert!(unfilled_slots(&request.instruction).is_empty());

    let required = request.output_schema["required"].as_array().unwrap();
    let required: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
    let weekdays: Vec<&str> = Weekday::ALL.iter().map(|day| day.key()).collect();
    assert_eq!(required, weekdays);
    assert_eq!(request.output_schema["additionalProperties"], json!(false));
}

#[tokio::test]
async fn test_raw_input_with_unknown_diet_is_rejected_before_generation() {
    let stub = StubGenerationService::returning(conformant_week());
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate_from_value(&json!({ "dietType": "keto" }))
        .await
        .unwrap_err();

    match error {
        PlanError::InvalidInput { plan, errors } => {
            assert_eq!(plan, PlanKind::Nutrition);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].path, "dietType");
            assert!(errors[0].message.contains("keto"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_raw_input_missing_diet_is_rejected() {
    let stub = StubGenerationService::returning(conformant_week());
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow.generate_from_value(&json!({})).await.unwrap_err();

    assert_eq!(error.field_errors()[0].path, "dietType");
    assert_eq!(error.field_errors()[0].message, "is required");
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_empty_output_is_generation_failure() {
    for stub in [
        StubGenerationService::empty(),
        StubGenerationService::returning(Value::Null),
        StubGenerationService::returning(json!({})),
        StubGenerationService::returning(json!("   ")),
    ] {
        let flow = NutritionPlanFlow::new(&stub);

        let error = flow
            .generate(&NutritionPlanInput::new(DietType::WeightLoss))
            .await
            .unwrap_err();

        assert!(
            matches!(error, PlanError::GenerationFailed { plan: PlanKind::Nutrition, .. }),
            "unexpected {error:?}"
        );
        assert_eq!(stub.calls(), 1);
    }
}

#[tokio::test]
async fn test_missing_day_is_invalid_output() {
    let mut week = conformant_week();
    week.as_object_mut().unwrap().remove("sunday");
    let stub = StubGenerationService::returning(week);
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate(&NutritionPlanInput::new(DietType::WeightGain))
        .await
        .unwrap_err();

    assert_eq!(error.code(), ErrorCode::OutputSchemaMismatch);
    assert_eq!(error.field_errors()[0].path, "sunday");
}

#[tokio::test]
async fn test_missing_meal_slot_is_invalid_output() {
    let mut week = conformant_week();
    week["wednesday"].as_object_mut().unwrap().remove("afternoonSnack");
    let stub = StubGenerationService::returning(week);
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate(&NutritionPlanInput::new(DietType::Vegan))
        .await
        .unwrap_err();

    assert!(matches!(error, PlanError::InvalidOutput { .. }));
    assert_eq!(error.field_errors()[0].path, "wednesday.afternoonSnack");
}

#[tokio::test]
async fn test_extra_keys_are_invalid_output() {
    let mut week = conformant_week();
    week["monday"]["supper"] = json!("Leche con galletas");
    week["notes"] = json!("Beber agua");
    let stub = StubGenerationService::returning(week);
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate(&NutritionPlanInput::new(DietType::Vegan))
        .await
        .unwrap_err();

    let paths: Vec<&str> = error.field_errors().iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"monday.supper"));
    assert!(paths.contains(&"notes"));
}

#[tokio::test]
async fn test_blank_meal_is_invalid_output() {
    let mut week = conformant_week();
    week["friday"]["dinner"] = json!("  ");
    let stub = StubGenerationService::returning(week);
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate(&NutritionPlanInput::new(DietType::WeightLoss))
        .await
        .unwrap_err();

    assert_eq!(error.field_errors()[0].path, "friday.dinner");
}

#[tokio::test]
async fn test_service_errors_are_passed_through() {
    let stub = StubGenerationService::failing(ErrorCode::ExternalRateLimited, "Groq: slow down");
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate(&NutritionPlanInput::new(DietType::Vegan))
        .await
        .unwrap_err();

    assert!(matches!(error, PlanError::Service(_)));
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ExternalRateLimited);
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_unparseable_model_output_is_generation_failure() {
    let stub = StubGenerationService::failing(ErrorCode::GenerationFailed, "not JSON");
    let flow = NutritionPlanFlow::new(&stub);

    let error = flow
        .generate(&NutritionPlanInput::new(DietType::Vegan))
        .await
        .unwrap_err();

    assert_eq!(error.code(), ErrorCode::GenerationFailed);
    assert!(error.to_string().contains("could not generate a nutrition plan"));
}

#[test]
fn test_instruction_renders_every_slot_for_every_diet() {
    for diet_type in DietType::ALL {
        let instruction =
            NutritionPlanFlow::<&StubGenerationService>::render_instruction(&NutritionPlanInput::new(
                diet_type,
            ));
        assert!(unfilled_slots(&instruction).is_empty());
        assert!(instruction.contains(diet_type.as_str()));
    }
}
