// ABOUTME: LLM generation configuration parsed from environment variables
// ABOUTME: Provider choice, model override, temperature and token budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use super::types::LlmProviderType;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Upper bound accepted for the sampling temperature
const MAX_TEMPERATURE: f32 = 2.0;

/// Settings shared by every plan-generation call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmConfig {
    /// Which backend to call
    pub provider: LlmProviderType,
    /// Model override; `None` uses the provider default
    pub model: Option<String>,
    /// Sampling temperature; `None` uses the provider default
    pub temperature: Option<f32>,
    /// Output token budget; `None` uses the provider default
    pub max_tokens: Option<u32>,
}

impl LlmConfig {
    /// Environment variable for model selection
    pub const MODEL_ENV_VAR: &'static str = "AQUACLUB_LLM_MODEL";

    /// Environment variable for the sampling temperature
    pub const TEMPERATURE_ENV_VAR: &'static str = "AQUACLUB_LLM_TEMPERATURE";

    /// Environment variable for the output token budget
    pub const MAX_TOKENS_ENV_VAR: &'static str = "AQUACLUB_LLM_MAX_TOKENS";

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the temperature or token budget is set but
    /// cannot be parsed, or if the temperature lies outside `0.0..=2.0`.
    pub fn from_env() -> AppResult<Self> {
        let model = env::var(Self::MODEL_ENV_VAR)
            .ok()
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());

        let temperature = parse_optional::<f32>(Self::TEMPERATURE_ENV_VAR)?;
        if let Some(t) = temperature {
            if !(0.0..=MAX_TEMPERATURE).contains(&t) {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!(
                        "{} must be between 0.0 and {MAX_TEMPERATURE}, got {t}",
                        Self::TEMPERATURE_ENV_VAR
                    ),
                ));
            }
        }

        let config = Self {
            provider: LlmProviderType::from_env(),
            model,
            temperature,
            max_tokens: parse_optional::<u32>(Self::MAX_TOKENS_ENV_VAR)?,
        };

        debug!(
            provider = %config.provider,
            model = ?config.model,
            temperature = ?config.temperature,
            max_tokens = ?config.max_tokens,
            "LLM configuration loaded"
        );

        Ok(config)
    }
}

/// Read an optional variable; blank counts as unset, garbage is an error
fn parse_optional<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map(Some).map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{name} has invalid value '{raw}': {e}"),
            )
        }),
        _ => Ok(None),
    }
}
