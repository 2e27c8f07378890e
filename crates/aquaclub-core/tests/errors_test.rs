// ABOUTME: Tests for AppError, ErrorCode and PlanError conversions
// ABOUTME: Verifies HTTP status mapping, field details and error chaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;

use aquaclub_core::errors::{
    AppError, ErrorCode, ErrorResponse, FieldError, PlanError, PlanKind,
};

#[test]
fn test_error_code_http_status() {
    assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
    assert_eq!(ErrorCode::GenerationFailed.http_status(), 502);
    assert_eq!(ErrorCode::OutputSchemaMismatch.http_status(), 502);
    assert_eq!(ErrorCode::ExternalRateLimited.http_status(), 503);
    assert_eq!(ErrorCode::ConfigMissing.http_status(), 500);
}

#[test]
fn test_error_code_serializes_screaming_snake_case() {
    let json = serde_json::to_string(&ErrorCode::GenerationFailed).unwrap();
    assert_eq!(json, "\"GENERATION_FAILED\"");
}

#[test]
fn test_field_error_display() {
    assert_eq!(
        FieldError::new("weeks", "must be at most 8").to_string(),
        "weeks: must be at most 8"
    );
    assert_eq!(FieldError::new("", "expected object").to_string(), "expected object");
}

#[test]
fn test_plan_error_messages() {
    let err = PlanError::generation_failed(PlanKind::Nutrition, "empty response");
    assert_eq!(
        err.to_string(),
        "could not generate a nutrition plan: empty response"
    );
    assert_eq!(err.code(), ErrorCode::GenerationFailed);
    assert!(err.field_errors().is_empty());

    let err = PlanError::invalid_input(
        PlanKind::Training,
        vec![
            FieldError::new("weeks", "must be at most 8"),
            FieldError::new("category", "is required"),
        ],
    );
    assert_eq!(
        err.to_string(),
        "invalid training plan input: weeks: must be at most 8; category: is required"
    );
    assert_eq!(err.field_errors().len(), 2);
}

#[test]
fn test_plan_error_into_app_error_keeps_fields() {
    let err = PlanError::invalid_output(
        PlanKind::Nutrition,
        vec![FieldError::new("monday.lunch", "is required")],
    );
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::OutputSchemaMismatch);
    assert_eq!(app.field_errors.len(), 1);
    assert!(app.message.contains("monday.lunch"));

    let response = ErrorResponse::from(app);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["code"], "OUTPUT_SCHEMA_MISMATCH");
    assert_eq!(json["error"]["fields"][0]["path"], "monday.lunch");
}

#[test]
fn test_service_error_passes_through() {
    let inner = AppError::external_service("Groq", "timeout");
    let err = PlanError::from(inner);
    assert_eq!(err.code(), ErrorCode::ExternalServiceError);
    let app: AppError = err.into();
    assert_eq!(app.message, "Groq: timeout");
}

#[test]
fn test_serde_error_converts_with_source() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app = AppError::from(parse);
    assert_eq!(app.code, ErrorCode::SerializationError);
    assert!(app.source().is_some());
}
