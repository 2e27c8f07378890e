// ABOUTME: Configuration management module for environment-driven settings
// ABOUTME: Exposes LLM provider selection and generation parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! Configuration module
//!
//! Environment-only configuration: there are no config files. Enum-valued
//! variables fall back to their default on unknown values, numeric variables
//! are parsed strictly.

/// LLM configuration loaded from environment variables
pub mod environment;
/// Strongly typed configuration enums
pub mod types;

pub use environment::LlmConfig;
pub use types::LlmProviderType;
