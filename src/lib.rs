// ABOUTME: Main library entry point for the Aquaclub plan-generation platform
// ABOUTME: Wires LLM providers, plan schemas and generation flows on top of the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![deny(unsafe_code)]

//! # Aquaclub
//!
//! Algorithmic core of a sports-club management application: AI-generated
//! weekly nutrition plans and multi-week training mesocycles, plus the
//! body-composition calculators shown on athlete records.
//!
//! ## Architecture
//!
//! - **`aquaclub-core`**: error types, wire constants and plan models
//! - **`aquaclub-intelligence`**: pure BMI and body-fat calculators
//! - **Schemas**: declarative shape descriptors used to validate plans and
//!   to constrain model output
//! - **LLM**: provider clients (Groq, `OpenAI`, Gemini, local servers)
//! - **Flows**: augment, prompt, generate once, validate
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use aquaclub::config::LlmConfig;
//! use aquaclub::flows::{LlmGenerationService, NutritionPlanFlow};
//! use aquaclub::llm::ChatProvider;
//! use aquaclub::models::{DietType, NutritionPlanInput};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = LlmConfig::from_env()?;
//!     let provider = ChatProvider::from_config(&config)?;
//!     let flow = NutritionPlanFlow::new(LlmGenerationService::from_config(provider, &config));
//!
//!     let plan = flow.generate(&NutritionPlanInput::new(DietType::Vegan)).await?;
//!     println!("{}", plan.monday.breakfast);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Plan generation flows and the generation service boundary
pub mod flows;

/// LLM provider clients and prompt templates
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Declarative plan schemas, validation and JSON Schema rendering
pub mod schemas;

/// Plan models re-exported from the core crate
pub use aquaclub_core::models;

/// Body-composition calculators re-exported from the intelligence crate
pub use aquaclub_intelligence as intelligence;
