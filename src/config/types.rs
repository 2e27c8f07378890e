// ABOUTME: Configuration type definitions for LLM provider selection
// ABOUTME: LlmProviderType enum with lenient parsing from AQUACLUB_LLM_PROVIDER
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::warn;

/// LLM provider selection for plan generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// Groq provider - LPU-accelerated inference for Llama models (default)
    #[default]
    Groq,
    /// Google Gemini provider
    Gemini,
    /// `OpenAI` cloud API
    #[serde(rename = "openai")]
    OpenAi,
    /// Local LLM provider - `OpenAI`-compatible endpoint (Ollama, vLLM, `LocalAI`)
    Local,
}

impl LlmProviderType {
    /// Environment variable name for LLM provider selection
    pub const ENV_VAR: &'static str = "AQUACLUB_LLM_PROVIDER";

    /// Parse a known provider name
    ///
    /// Accepts common aliases (`google`, `ollama`, `vllm`, `localai`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "gemini" | "google" => Some(Self::Gemini),
            "openai" => Some(Self::OpenAi),
            "local" | "ollama" | "vllm" | "localai" => Some(Self::Local),
            _ => None,
        }
    }

    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Load from environment variable
    ///
    /// Unset selects the default. An unknown value also selects the default
    /// and logs a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let Ok(value) = env::var(Self::ENV_VAR) else {
            return Self::default();
        };
        Self::parse(&value).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(
                "Unknown {} value '{value}', falling back to {fallback}",
                Self::ENV_VAR
            );
            fallback
        })
    }

    /// Environment variable holding this provider's API key, if it needs one
    #[must_use]
    pub const fn api_key_env_var(self) -> Option<&'static str> {
        match self {
            Self::Groq => Some("GROQ_API_KEY"),
            Self::Gemini => Some("GEMINI_API_KEY"),
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::Local => None,
        }
    }
}

impl Display for LlmProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Groq => write!(f, "groq"),
            Self::Gemini => write!(f, "gemini"),
            Self::OpenAi => write!(f, "openai"),
            Self::Local => write!(f, "local"),
        }
    }
}
