// ABOUTME: Re-exports the unified error types from aquaclub-core
// ABOUTME: Keeps `crate::errors` paths stable for the flows and provider clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # Unified Error Handling
//!
//! Error types live in `aquaclub-core` so every workspace crate shares the
//! same `ErrorCode` table. This module re-exports them for the main crate.

pub use aquaclub_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, FieldError, PlanError,
    PlanKind,
};
