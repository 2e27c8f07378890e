// ABOUTME: Unified LLM provider selector for runtime provider switching
// ABOUTME: Builds Groq, OpenAI, Gemini or local providers from LlmConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

//! # LLM Provider Selector
//!
//! Set `AQUACLUB_LLM_PROVIDER` to pick the backend:
//! - `groq` (default): Groq cloud (requires `GROQ_API_KEY`)
//! - `gemini`: Google Gemini (requires `GEMINI_API_KEY`)
//! - `openai`: `OpenAI` cloud (requires `OPENAI_API_KEY`)
//! - `local`/`ollama`/`vllm`/`localai`: `OpenAI`-compatible local server

use async_trait::async_trait;
use tracing::info;

use super::{
    ChatRequest, ChatResponse, GeminiProvider, LlmCapabilities, LlmProvider,
    OpenAiCompatibleProvider,
};
use crate::config::{LlmConfig, LlmProviderType};
use crate::errors::AppError;

/// Unified chat provider wrapping every supported backend
#[derive(Debug)]
pub enum ChatProvider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Groq cloud through the `OpenAI`-compatible client
    Groq(OpenAiCompatibleProvider),
    /// `OpenAI` cloud
    OpenAi(OpenAiCompatibleProvider),
    /// Local LLM via `OpenAI`-compatible API (Ollama, vLLM, `LocalAI`)
    Local(OpenAiCompatibleProvider),
}

impl ChatProvider {
    /// Create a provider from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the selected
    /// provider's API key is missing.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(&LlmConfig::from_env()?)
    }

    /// Create the provider selected by `config`
    ///
    /// A configured model overrides the provider's default model.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected provider's API key is missing or its
    /// HTTP client cannot be created.
    pub fn from_config(config: &LlmConfig) -> Result<Self, AppError> {
        info!(
            "Initializing LLM provider: {} (set {} to change)",
            config.provider,
            LlmProviderType::ENV_VAR
        );

        let provider = match config.provider {
            LlmProviderType::Groq => Self::Groq(OpenAiCompatibleProvider::groq_from_env()?),
            LlmProviderType::OpenAi => Self::OpenAi(OpenAiCompatibleProvider::openai_from_env()?),
            LlmProviderType::Local => Self::Local(OpenAiCompatibleProvider::local_from_env()?),
            LlmProviderType::Gemini => Self::Gemini(GeminiProvider::from_env()?),
        };

        let provider = match &config.model {
            Some(model) => provider.with_default_model(model),
            None => provider,
        };

        info!(
            "Provider {} ready with model: {}",
            provider.display_name(),
            provider.default_model()
        );
        Ok(provider)
    }

    /// Get the provider type
    #[must_use]
    pub const fn provider_type(&self) -> LlmProviderType {
        match self {
            Self::Gemini(_) => LlmProviderType::Gemini,
            Self::Groq(_) => LlmProviderType::Groq,
            Self::OpenAi(_) => LlmProviderType::OpenAi,
            Self::Local(_) => LlmProviderType::Local,
        }
    }

    /// Override the default model of the wrapped provider
    #[must_use]
    pub fn with_default_model(self, model: &str) -> Self {
        match self {
            Self::Gemini(p) => Self::Gemini(p.with_default_model(model)),
            Self::Groq(p) => Self::Groq(p.with_default_model(model)),
            Self::OpenAi(p) => Self::OpenAi(p.with_default_model(model)),
            Self::Local(p) => Self::Local(p.with_default_model(model)),
        }
    }

    fn inner(&self) -> &dyn LlmProvider {
        match self {
            Self::Gemini(p) => p,
            Self::Groq(p) | Self::OpenAi(p) | Self::Local(p) => p,
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn display_name(&self) -> &'static str {
        self.inner().display_name()
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.inner().capabilities()
    }

    fn default_model(&self) -> &str {
        self.inner().default_model()
    }

    fn available_models(&self) -> &'static [&'static str] {
        self.inner().available_models()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.inner().complete(request).await
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        self.inner().health_check().await
    }
}
